//! Repository for the `live_events` table.

use sqlx::PgPool;

use palco_core::types::DbId;

use crate::models::live_event::{CreateLiveEvent, LiveEvent, UpdateLiveEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, host_tutor_id, starts_at, stream_url, \
                        is_published, created_at, updated_at";

/// Provides CRUD operations for public live events.
pub struct LiveEventRepo;

impl LiveEventRepo {
    /// Insert a new (unpublished) event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLiveEvent) -> Result<LiveEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO live_events (title, description, host_tutor_id, starts_at, stream_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LiveEvent>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.host_tutor_id)
            .bind(input.starts_at)
            .bind(&input.stream_url)
            .fetch_one(pool)
            .await
    }

    /// Published events visible to guests, soonest first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<LiveEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM live_events
             WHERE is_published = true
             ORDER BY starts_at ASC"
        );
        sqlx::query_as::<_, LiveEvent>(&query).fetch_all(pool).await
    }

    /// Every event, newest first (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<LiveEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM live_events ORDER BY created_at DESC");
        sqlx::query_as::<_, LiveEvent>(&query).fetch_all(pool).await
    }

    /// Partially update an event (including flipping `is_published`).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLiveEvent,
    ) -> Result<Option<LiveEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE live_events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                starts_at = COALESCE($4, starts_at),
                stream_url = COALESCE($5, stream_url),
                is_published = COALESCE($6, is_published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LiveEvent>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.starts_at)
            .bind(&input.stream_url)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }
}
