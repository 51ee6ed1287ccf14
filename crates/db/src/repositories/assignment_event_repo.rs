//! Repository for the `assignment_events` audit trail.

use sqlx::PgPool;

use palco_core::types::DbId;

use crate::models::assignment_event::{AssignmentEvent, NewAssignmentEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, submission_id, actor_user_id, previous_tutor_id, new_tutor_id, action, created_at";

/// Append-only audit log of assignment changes.
pub struct AssignmentEventRepo;

impl AssignmentEventRepo {
    /// Append an audit row.
    pub async fn record(
        pool: &PgPool,
        input: &NewAssignmentEvent,
    ) -> Result<AssignmentEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignment_events
                (submission_id, actor_user_id, previous_tutor_id, new_tutor_id, action)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssignmentEvent>(&query)
            .bind(input.submission_id)
            .bind(input.actor_user_id)
            .bind(input.previous_tutor_id)
            .bind(input.new_tutor_id)
            .bind(input.action)
            .fetch_one(pool)
            .await
    }

    /// Full history for a submission, oldest first.
    pub async fn list_for_submission(
        pool: &PgPool,
        submission_id: DbId,
    ) -> Result<Vec<AssignmentEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assignment_events
             WHERE submission_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, AssignmentEvent>(&query)
            .bind(submission_id)
            .fetch_all(pool)
            .await
    }
}
