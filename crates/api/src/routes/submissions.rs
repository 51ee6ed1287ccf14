//! Route definitions for the submission workflow.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{feedbacks, submissions};
use crate::state::AppState;

/// Submission routes mounted at `/submissions`. Static segments win over
/// the `{id}` capture, so `/pool` and friends never collide with it.
///
/// ```text
/// POST /                 -> create_submission (actor)
/// GET  /mine             -> list_mine (actor)
/// GET  /pool             -> pool (tutor)
/// GET  /assigned         -> assigned (admin)
/// GET  /queue            -> queue (tutor)
/// GET  /{id}             -> get_submission
/// PUT  /{id}/tutor       -> assign_tutor (admin, or tutor self-serve)
/// POST /{id}/claim       -> claim (tutor)
/// GET  /{id}/history     -> history (admin)
/// POST /{id}/feedback    -> complete_with_feedback (tutor)
/// GET  /{id}/feedback    -> get_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submissions::create_submission))
        .route("/mine", get(submissions::list_mine))
        .route("/pool", get(submissions::pool))
        .route("/assigned", get(submissions::assigned))
        .route("/queue", get(submissions::queue))
        .route("/{id}", get(submissions::get_submission))
        .route("/{id}/tutor", put(submissions::assign_tutor))
        .route("/{id}/claim", post(submissions::claim))
        .route("/{id}/history", get(submissions::history))
        .route(
            "/{id}/feedback",
            get(feedbacks::get_feedback).post(feedbacks::complete_with_feedback),
        )
}
