//! Platform user model (actors, tutors, admins).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// `password_hash` is never serialized into API responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role_id: DbId,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub failed_login_count: i32,
    #[serde(skip_serializing)]
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user (admin-provisioned).
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
}

/// Per-tutor load aggregates joined from submissions and feedbacks,
/// fed into the core ranking policy.
#[derive(Debug, Clone, FromRow)]
pub struct TutorLoadRow {
    pub tutor_id: DbId,
    pub username: String,
    pub joined_at: Timestamp,
    pub pending_count: i64,
    pub actors_tutored: i64,
    pub completed_count: i64,
}
