//! Handlers for public live events (masterclasses, Q&As).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use palco_core::error::CoreError;
use palco_core::roles::ROLE_TUTOR;
use palco_core::types::DbId;
use palco_core::validation::validate_url;
use palco_db::models::live_event::{CreateLiveEvent, UpdateLiveEvent};
use palco_db::repositories::{LiveEventRepo, RoleRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/events
///
/// Published events, soonest first. Public: visible to guests.
pub async fn list_published(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = LiveEventRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/admin/events
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let events = LiveEventRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/admin/events
///
/// Create an event (unpublished until explicitly published).
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateLiveEvent>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Event title is required".into(),
        )));
    }
    if let Some(url) = &input.stream_url {
        validate_url(url)?;
    }

    let host = UserRepo::find_by_id(&state.pool, input.host_tutor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tutor",
            id: input.host_tutor_id,
        }))?;
    let host_role = RoleRepo::resolve_name(&state.pool, host.role_id).await?;
    if host_role != ROLE_TUTOR {
        return Err(AppError::Core(CoreError::Validation(format!(
            "User {} is not a tutor",
            input.host_tutor_id
        ))));
    }

    let event = LiveEventRepo::create(&state.pool, &input).await?;

    tracing::info!(event_id = event.id, title = %event.title, by = admin.user_id, "Live event created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// PUT /api/admin/events/:id
///
/// Partial update, including flipping `is_published`.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLiveEvent>,
) -> AppResult<impl IntoResponse> {
    if let Some(url) = &input.stream_url {
        validate_url(url)?;
    }

    let event = LiveEventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LiveEvent",
            id,
        }))?;

    tracing::info!(event_id = id, published = event.is_published, by = admin.user_id, "Live event updated");

    Ok(Json(DataResponse { data: event }))
}
