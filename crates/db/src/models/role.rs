use serde::Serialize;
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

/// A row from the `roles` table (seeded, not user-editable).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
