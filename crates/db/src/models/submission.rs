//! Self-tape submission model.
//!
//! Feedback status and the deadline are deliberately not stored:
//! status is derived from `feedback_id` and the deadline is a read-time
//! projection over `created_at`, so neither can drift from the source
//! fields.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

/// A row from the `submissions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Submission {
    pub id: DbId,
    pub theme_id: DbId,
    pub actor_id: DbId,
    /// Ordered video links, as uploaded.
    pub tape_urls: Vec<String>,
    pub note: Option<String>,
    pub assigned_tutor_id: Option<DbId>,
    pub feedback_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a submission (actor upload).
#[derive(Debug, Deserialize)]
pub struct CreateSubmission {
    pub theme_id: DbId,
    pub tape_urls: Vec<String>,
    pub note: Option<String>,
}
