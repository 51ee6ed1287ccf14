//! Route definitions for feedback listings. Per-submission feedback
//! endpoints live under `/submissions/{id}/feedback`.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedbacks;
use crate::state::AppState;

/// Feedback routes mounted at `/feedbacks`.
///
/// ```text
/// GET /mine  -> list_mine (tutor)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/mine", get(feedbacks::list_mine))
}
