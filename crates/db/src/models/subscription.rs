//! Subscription model. At most one active subscription per user,
//! enforced by a partial unique index.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Recognized plan names, cheapest first.
pub const PLANS: &[&str] = &["basico", "pro", "elite"];

/// A row from the `subscriptions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Subscription {
    pub id: DbId,
    pub user_id: DbId,
    pub plan: String,
    pub status: String,
    pub started_at: Timestamp,
    pub renews_at: Timestamp,
    pub cancelled_at: Option<Timestamp>,
}

/// DTO for subscribing or changing plan.
#[derive(Debug, Deserialize)]
pub struct CreateSubscription {
    pub plan: String,
}
