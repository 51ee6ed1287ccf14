//! Route definitions for the public theme catalog (admin management lives
//! under `/admin/themes`).

use axum::routing::get;
use axum::Router;

use crate::handlers::themes;
use crate::state::AppState;

/// Public theme routes mounted at `/themes`.
///
/// ```text
/// GET /  -> list_open (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(themes::list_open))
}
