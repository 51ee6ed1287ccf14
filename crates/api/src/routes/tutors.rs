//! Route definitions for tutor listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::tutors;
use crate::state::AppState;

/// Tutor routes mounted at `/tutors`.
///
/// ```text
/// GET /ranked  -> ranked (admin assignment screen)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/ranked", get(tutors::ranked))
}
