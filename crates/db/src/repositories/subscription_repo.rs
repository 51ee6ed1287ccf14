//! Repository for the `subscriptions` table.
//!
//! A partial unique index (`uq_subscriptions_user_active`) guarantees at
//! most one active subscription per user.

use sqlx::PgPool;

use palco_core::types::DbId;

use crate::models::subscription::Subscription;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, plan, status, started_at, renews_at, cancelled_at";

/// Renewal period in days for all plans.
const RENEWAL_PERIOD_DAYS: i32 = 30;

pub struct SubscriptionRepo;

impl SubscriptionRepo {
    /// The user's active subscription, if any.
    pub async fn find_active_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM subscriptions WHERE user_id = $1 AND status = 'active'");
        sqlx::query_as::<_, Subscription>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Subscribe or change plan: updates the active row in place when one
    /// exists (plan change keeps the original `started_at`), otherwise
    /// inserts a fresh active subscription.
    pub async fn subscribe(
        pool: &PgPool,
        user_id: DbId,
        plan: &str,
    ) -> Result<Subscription, sqlx::Error> {
        let update = format!(
            "UPDATE subscriptions
             SET plan = $2, renews_at = NOW() + make_interval(days => $3)
             WHERE user_id = $1 AND status = 'active'
             RETURNING {COLUMNS}"
        );
        if let Some(existing) = sqlx::query_as::<_, Subscription>(&update)
            .bind(user_id)
            .bind(plan)
            .bind(RENEWAL_PERIOD_DAYS)
            .fetch_optional(pool)
            .await?
        {
            return Ok(existing);
        }

        let insert = format!(
            "INSERT INTO subscriptions (user_id, plan, status, started_at, renews_at)
             VALUES ($1, $2, 'active', NOW(), NOW() + make_interval(days => $3))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscription>(&insert)
            .bind(user_id)
            .bind(plan)
            .bind(RENEWAL_PERIOD_DAYS)
            .fetch_one(pool)
            .await
    }

    /// Cancel the user's active subscription. Returns `None` when there is
    /// nothing active to cancel.
    pub async fn cancel(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        let query = format!(
            "UPDATE subscriptions
             SET status = 'cancelled', cancelled_at = NOW()
             WHERE user_id = $1 AND status = 'active'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscription>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
