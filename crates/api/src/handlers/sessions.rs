//! Handlers for 1:1 live session scheduling and session categories.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use palco_core::error::CoreError;
use palco_core::roles::{ROLE_ACTOR, ROLE_ADMIN, ROLE_TUTOR};
use palco_core::types::DbId;
use palco_core::validation::validate_url;
use palco_db::models::live_session::{
    CreateLiveSession, STATUS_CANCELLED, STATUS_COMPLETED,
};
use palco_db::models::session_category::CreateSessionCategory;
use palco_db::repositories::{LiveSessionRepo, RoleRepo, SessionCategoryRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/session-categories
pub async fn list_categories(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = SessionCategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/admin/session-categories
pub async fn create_category(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSessionCategory>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Category name is required".into(),
        )));
    }

    let category = SessionCategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, by = admin.user_id, "Session category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// POST /api/sessions
///
/// Actor books a live session with a tutor. The slot must be in the
/// future, the tutor must hold the tutor role, and the category must
/// exist.
pub async fn book(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateLiveSession>,
) -> AppResult<impl IntoResponse> {
    if user.role != ROLE_ACTOR {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only actors can book live sessions".into(),
        )));
    }
    if input.scheduled_at <= Utc::now() {
        return Err(AppError::Core(CoreError::Validation(
            "Session must be scheduled in the future".into(),
        )));
    }
    if input.duration_mins <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Session duration must be positive".into(),
        )));
    }
    if let Some(url) = &input.meeting_url {
        validate_url(url)?;
    }

    let tutor = UserRepo::find_by_id(&state.pool, input.tutor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tutor",
            id: input.tutor_id,
        }))?;
    let tutor_role = RoleRepo::resolve_name(&state.pool, tutor.role_id).await?;
    if tutor_role != ROLE_TUTOR {
        return Err(AppError::Core(CoreError::Validation(format!(
            "User {} is not a tutor",
            input.tutor_id
        ))));
    }

    SessionCategoryRepo::find_by_id(&state.pool, input.category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SessionCategory",
            id: input.category_id,
        }))?;

    let session = LiveSessionRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        session_id = session.id,
        tutor_id = session.tutor_id,
        actor_id = session.actor_id,
        scheduled_at = %session.scheduled_at,
        "Live session booked",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/sessions/mine
///
/// Sessions the caller participates in (as actor or tutor), soonest first.
pub async fn list_mine(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let sessions = LiveSessionRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// Request body for `PUT /api/sessions/:id/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// PUT /api/sessions/:id/status
///
/// Move a scheduled session to `completed` or `cancelled`. The session's
/// tutor or an admin completes; either participant or an admin cancels.
pub async fn set_status(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<impl IntoResponse> {
    if input.status != STATUS_COMPLETED && input.status != STATUS_CANCELLED {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown session status: {}",
            input.status
        ))));
    }

    let session = LiveSessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LiveSession",
            id,
        }))?;

    let allowed = match input.status.as_str() {
        STATUS_COMPLETED => user.role == ROLE_ADMIN || session.tutor_id == user.user_id,
        _ => {
            user.role == ROLE_ADMIN
                || session.tutor_id == user.user_id
                || session.actor_id == user.user_id
        }
    };
    if !allowed {
        return Err(AppError::Core(CoreError::Forbidden(
            "You are not a participant of this session".into(),
        )));
    }

    let updated = LiveSessionRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Session is no longer in the scheduled state".into(),
            ))
        })?;

    tracing::info!(session_id = id, status = %updated.status, by = user.user_id, "Live session status changed");

    Ok(Json(DataResponse { data: updated }))
}
