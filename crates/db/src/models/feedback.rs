//! Tutor feedback model. One-to-one with a completed submission,
//! immutable after creation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

/// A row from the `feedbacks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Feedback {
    pub id: DbId,
    pub submission_id: DbId,
    pub tutor_id: DbId,
    pub actor_id: DbId,
    pub video_url: String,
    pub transcript: String,
    pub created_at: Timestamp,
}

/// DTO for delivering feedback on a submission.
#[derive(Debug, Deserialize)]
pub struct CreateFeedback {
    pub video_url: String,
    pub transcript: String,
}
