//! Repository for the `submissions` table.
//!
//! Ordering policy: pool listings are oldest-first (rough FIFO fairness);
//! since the deadline is a fixed business-day offset from `created_at`,
//! ascending `created_at` is also ascending deadline for the
//! urgency-ordered assigned view.

use sqlx::PgPool;

use palco_core::types::DbId;

use crate::models::submission::{CreateSubmission, Submission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, theme_id, actor_id, tape_urls, note, assigned_tutor_id, \
                        feedback_id, created_at, updated_at";

/// Provides CRUD operations and workflow mutations for submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission for an actor, returning the created row.
    pub async fn create(
        pool: &PgPool,
        actor_id: DbId,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (theme_id, actor_id, tape_urls, note)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(input.theme_id)
            .bind(actor_id)
            .bind(&input.tape_urls)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an actor's own submissions, newest first.
    pub async fn list_for_actor(
        pool: &PgPool,
        actor_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions WHERE actor_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(actor_id)
            .fetch_all(pool)
            .await
    }

    /// The shared pool: pending submissions with no tutor, oldest first.
    pub async fn unassigned_pending(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE assigned_tutor_id IS NULL AND feedback_id IS NULL
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Submission>(&query).fetch_all(pool).await
    }

    /// Pending submissions already assigned to some tutor, soonest due first.
    pub async fn assigned_pending(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE assigned_tutor_id IS NOT NULL AND feedback_id IS NULL
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Submission>(&query).fetch_all(pool).await
    }

    /// A tutor's working queue: their own assigned pending submissions
    /// plus the open pool, oldest first.
    pub async fn pending_for_tutor(
        pool: &PgPool,
        tutor_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE (assigned_tutor_id = $1 OR assigned_tutor_id IS NULL)
               AND feedback_id IS NULL
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(tutor_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the assigned tutor (last-write-wins; `None` returns the
    /// submission to the pool). The `feedback_id IS NULL` guard makes the
    /// completed state terminal even under races.
    ///
    /// Returns `None` if the submission does not exist or is completed.
    pub async fn assign_tutor(
        pool: &PgPool,
        id: DbId,
        tutor_id: Option<DbId>,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET assigned_tutor_id = $2, updated_at = NOW()
             WHERE id = $1 AND feedback_id IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(tutor_id)
            .fetch_optional(pool)
            .await
    }

    /// Claim a pool submission for a tutor. The `assigned_tutor_id IS NULL`
    /// guard loses the race cleanly when two tutors claim at once.
    ///
    /// Returns `None` if the submission is missing, already claimed, or
    /// completed.
    pub async fn claim_from_pool(
        pool: &PgPool,
        id: DbId,
        tutor_id: DbId,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET assigned_tutor_id = $2, updated_at = NOW()
             WHERE id = $1 AND assigned_tutor_id IS NULL AND feedback_id IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(tutor_id)
            .fetch_optional(pool)
            .await
    }
}
