//! Handlers for subscription management.
//!
//! Payment processing is out of scope; this tracks plan membership only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use palco_core::error::CoreError;
use palco_db::models::subscription::{CreateSubscription, PLANS};
use palco_db::repositories::SubscriptionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/subscriptions/mine
///
/// The caller's active subscription. 204 when there is none.
pub async fn mine(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let subscription = SubscriptionRepo::find_active_for_user(&state.pool, user.user_id).await?;

    match subscription {
        Some(s) => Ok(Json(DataResponse { data: s }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /api/subscriptions
///
/// Subscribe to a plan, or change the active subscription's plan.
pub async fn subscribe(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateSubscription>,
) -> AppResult<impl IntoResponse> {
    if !PLANS.contains(&input.plan.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown plan: {}",
            input.plan
        ))));
    }

    let subscription = SubscriptionRepo::subscribe(&state.pool, user.user_id, &input.plan).await?;

    tracing::info!(user_id = user.user_id, plan = %subscription.plan, "Subscription updated");

    Ok(Json(DataResponse { data: subscription }))
}

/// DELETE /api/subscriptions/mine
///
/// Cancel the caller's active subscription. 404 when nothing is active.
pub async fn cancel(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let cancelled = SubscriptionRepo::cancel(&state.pool, user.user_id).await?;
    if cancelled.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Subscription",
            id: user.user_id,
        }));
    }

    tracing::info!(user_id = user.user_id, "Subscription cancelled");

    Ok(StatusCode::NO_CONTENT)
}
