pub mod admin;
pub mod auth;
pub mod events;
pub mod feedbacks;
pub mod health;
pub mod sessions;
pub mod submissions;
pub mod subscriptions;
pub mod themes;
pub mod tutors;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                            service + database health (public)
///
/// /auth/login                        login (public)
/// /auth/refresh                      refresh tokens (public)
/// /auth/logout                       logout (requires auth)
///
/// /admin/users                       list, create (admin only)
/// /admin/users/{id}/deactivate       soft-deactivate (PUT)
/// /admin/themes                      list, create
/// /admin/themes/{id}                 get, update, deactivate
/// /admin/session-categories          create (POST)
/// /admin/events                      list, create
/// /admin/events/{id}                 update, publish (PUT)
///
/// /themes                            themes open for submission (public)
///
/// /submissions                       submit a self-tape (actor, POST)
/// /submissions/mine                  the actor's own submissions
/// /submissions/pool                  unassigned pending pool (tutor)
/// /submissions/assigned              assigned pending, due-first (admin)
/// /submissions/queue                 tutor's queue: own + pool (tutor)
/// /submissions/{id}                  detail with deadline + countdown
/// /submissions/{id}/tutor            assign / return to pool (PUT)
/// /submissions/{id}/claim            claim from pool (tutor, POST)
/// /submissions/{id}/history          assignment audit trail (admin)
/// /submissions/{id}/feedback         deliver (POST), read (GET)
///
/// /feedbacks/mine                    feedback delivered by the tutor
///
/// /tutors/ranked                     assignment candidates (admin)
///
/// /session-categories                list categories
/// /sessions                          book a live session (actor, POST)
/// /sessions/mine                     the caller's sessions
/// /sessions/{id}/status              complete / cancel (PUT)
///
/// /events                            published live events (public)
///
/// /subscriptions                     subscribe or change plan (POST)
/// /subscriptions/mine                active subscription (GET, DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/themes", themes::router())
        .nest("/submissions", submissions::router())
        .nest("/feedbacks", feedbacks::router())
        .nest("/tutors", tutors::router())
        .nest("/session-categories", sessions::categories_router())
        .nest("/sessions", sessions::router())
        .nest("/events", events::router())
        .nest("/subscriptions", subscriptions::router())
}
