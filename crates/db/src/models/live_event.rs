//! Public live event model (masterclasses, Q&As). Published events are
//! visible to guests without authentication.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

/// A row from the `live_events` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LiveEvent {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub host_tutor_id: DbId,
    pub starts_at: Timestamp,
    pub stream_url: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a live event.
#[derive(Debug, Deserialize)]
pub struct CreateLiveEvent {
    pub title: String,
    pub description: String,
    pub host_tutor_id: DbId,
    pub starts_at: Timestamp,
    pub stream_url: Option<String>,
}

/// DTO for partially updating a live event (including publishing it).
#[derive(Debug, Deserialize)]
pub struct UpdateLiveEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub stream_url: Option<String>,
    pub is_published: Option<bool>,
}
