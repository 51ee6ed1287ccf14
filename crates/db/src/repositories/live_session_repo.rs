//! Repository for the `live_sessions` table.

use sqlx::PgPool;

use palco_core::types::DbId;

use crate::models::live_session::{CreateLiveSession, LiveSession, STATUS_SCHEDULED};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tutor_id, actor_id, category_id, scheduled_at, duration_mins, \
                        meeting_url, status, notes, created_at, updated_at";

/// Provides booking and lifecycle operations for 1:1 live sessions.
pub struct LiveSessionRepo;

impl LiveSessionRepo {
    /// Book a session for an actor, returning the created row.
    pub async fn create(
        pool: &PgPool,
        actor_id: DbId,
        input: &CreateLiveSession,
    ) -> Result<LiveSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO live_sessions
                (tutor_id, actor_id, category_id, scheduled_at, duration_mins, meeting_url, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(input.tutor_id)
            .bind(actor_id)
            .bind(input.category_id)
            .bind(input.scheduled_at)
            .bind(input.duration_mins)
            .bind(&input.meeting_url)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a session by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LiveSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM live_sessions WHERE id = $1");
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every session the user participates in (as actor or tutor),
    /// soonest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<LiveSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM live_sessions
             WHERE actor_id = $1 OR tutor_id = $1
             ORDER BY scheduled_at ASC"
        );
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Move a scheduled session to `completed` or `cancelled`.
    ///
    /// The `status = 'scheduled'` guard makes both end states terminal.
    /// Returns `None` if the session is missing or already finished.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<LiveSession>, sqlx::Error> {
        let query = format!(
            "UPDATE live_sessions SET status = $2, updated_at = NOW()
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(id)
            .bind(status)
            .bind(STATUS_SCHEDULED)
            .fetch_optional(pool)
            .await
    }
}
