//! Scheduled 1:1 live session model (actor books a tutor).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// A row from the `live_sessions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LiveSession {
    pub id: DbId,
    pub tutor_id: DbId,
    pub actor_id: DbId,
    pub category_id: DbId,
    pub scheduled_at: Timestamp,
    pub duration_mins: i32,
    pub meeting_url: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for booking a live session.
#[derive(Debug, Deserialize)]
pub struct CreateLiveSession {
    pub tutor_id: DbId,
    pub category_id: DbId,
    pub scheduled_at: Timestamp,
    pub duration_mins: i32,
    pub meeting_url: Option<String>,
    pub notes: Option<String>,
}
