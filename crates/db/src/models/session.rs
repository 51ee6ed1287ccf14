//! Refresh-token session model.

use serde::Serialize;
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

/// A row from the `user_sessions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new session on login or token refresh.
#[derive(Debug)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
