//! Route definitions for public live events.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Public event routes mounted at `/events` (admin management lives under
/// `/admin/events`).
///
/// ```text
/// GET /  -> list_published (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(events::list_published))
}
