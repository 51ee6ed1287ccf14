//! Route definitions for admin-only management surfaces.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin, events, sessions, themes};
use crate::state::AppState;

/// Admin routes mounted at `/admin`. Every handler behind this router
/// extracts [`crate::middleware::rbac::RequireAdmin`].
///
/// ```text
/// GET    /users                   -> list_users
/// POST   /users                   -> create_user
/// PUT    /users/{id}/deactivate   -> deactivate_user
///
/// GET    /themes                  -> list_all (incl. inactive)
/// POST   /themes                  -> create
/// GET    /themes/{id}             -> get
/// PUT    /themes/{id}             -> update
/// DELETE /themes/{id}             -> deactivate (soft)
///
/// POST   /session-categories      -> create_category
///
/// GET    /events                  -> list_all (incl. unpublished)
/// POST   /events                  -> create
/// PUT    /events/{id}             -> update (incl. publishing)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/users/{id}/deactivate", put(admin::deactivate_user))
        .route("/themes", get(themes::list_all).post(themes::create))
        .route(
            "/themes/{id}",
            get(themes::get).put(themes::update).delete(themes::deactivate),
        )
        .route("/session-categories", post(sessions::create_category))
        .route("/events", get(events::list_all).post(events::create))
        .route("/events/{id}", put(events::update))
}
