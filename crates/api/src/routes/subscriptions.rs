//! Route definitions for subscriptions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::subscriptions;
use crate::state::AppState;

/// Subscription routes mounted at `/subscriptions`.
///
/// ```text
/// POST   /      -> subscribe (or change plan)
/// GET    /mine  -> mine (204 when none active)
/// DELETE /mine  -> cancel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(subscriptions::subscribe))
        .route(
            "/mine",
            get(subscriptions::mine).delete(subscriptions::cancel),
        )
}
