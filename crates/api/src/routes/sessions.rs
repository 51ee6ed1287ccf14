//! Route definitions for 1:1 live sessions and their categories.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Live session routes mounted at `/sessions`.
///
/// ```text
/// POST /              -> book (actor)
/// GET  /mine          -> list_mine (participant)
/// PUT  /{id}/status   -> set_status (participant or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions::book))
        .route("/mine", get(sessions::list_mine))
        .route("/{id}/status", put(sessions::set_status))
}

/// Category listing mounted at `/session-categories` (creation lives under
/// `/admin/session-categories`).
pub fn categories_router() -> Router<AppState> {
    Router::new().route("/", get(sessions::list_categories))
}
