//! Repository for the `feedbacks` table.

use sqlx::PgPool;

use palco_core::types::DbId;

use crate::models::feedback::{CreateFeedback, Feedback};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, submission_id, tutor_id, actor_id, video_url, transcript, created_at";

/// Provides creation and lookup for tutor feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Create a feedback row and link it to its submission in one
    /// transaction. A pool submission (no assigned tutor) is claimed by the
    /// completing tutor in the same update, so the submission row always
    /// records who delivered.
    ///
    /// The link update is guarded by `feedback_id IS NULL`; if another
    /// feedback won the race the transaction rolls back and `None` is
    /// returned, so a submission can never end up with two feedbacks.
    pub async fn create_for_submission(
        pool: &PgPool,
        submission_id: DbId,
        tutor_id: DbId,
        actor_id: DbId,
        input: &CreateFeedback,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO feedbacks (submission_id, tutor_id, actor_id, video_url, transcript)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let feedback = sqlx::query_as::<_, Feedback>(&insert)
            .bind(submission_id)
            .bind(tutor_id)
            .bind(actor_id)
            .bind(&input.video_url)
            .bind(&input.transcript)
            .fetch_one(&mut *tx)
            .await?;

        let linked = sqlx::query(
            "UPDATE submissions SET
                feedback_id = $2,
                assigned_tutor_id = COALESCE(assigned_tutor_id, $3),
                updated_at = NOW()
             WHERE id = $1 AND feedback_id IS NULL",
        )
        .bind(submission_id)
        .bind(feedback.id)
        .bind(tutor_id)
        .execute(&mut *tx)
        .await?;

        if linked.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(feedback))
    }

    /// Find the feedback for a submission, if delivered.
    pub async fn find_by_submission(
        pool: &PgPool,
        submission_id: DbId,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedbacks WHERE submission_id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(submission_id)
            .fetch_optional(pool)
            .await
    }

    /// List all feedback delivered by a tutor, newest first.
    pub async fn list_for_tutor(
        pool: &PgPool,
        tutor_id: DbId,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM feedbacks WHERE tutor_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(tutor_id)
            .fetch_all(pool)
            .await
    }
}
