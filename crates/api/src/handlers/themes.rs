//! Handlers for audition themes: a public catalog of open themes plus
//! admin CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use palco_core::error::CoreError;
use palco_core::types::DbId;
use palco_core::validation::validate_url;
use palco_db::models::theme::{CreateTheme, UpdateTheme};
use palco_db::repositories::ThemeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/themes
///
/// Themes currently open for submissions. Public: guests browse the
/// catalog before signing up.
pub async fn list_open(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let themes = ThemeRepo::list_open(&state.pool).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// GET /api/admin/themes
///
/// Every theme including inactive ones.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let themes = ThemeRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// POST /api/admin/themes
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTheme>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Theme title is required".into(),
        )));
    }
    if let Some(url) = &input.reference_url {
        validate_url(url)?;
    }

    let theme = ThemeRepo::create(&state.pool, &input).await?;

    tracing::info!(theme_id = theme.id, title = %theme.title, by = admin.user_id, "Theme created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: theme })))
}

/// GET /api/admin/themes/:id
pub async fn get(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let theme = ThemeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Theme", id }))?;
    Ok(Json(DataResponse { data: theme }))
}

/// PUT /api/admin/themes/:id
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTheme>,
) -> AppResult<impl IntoResponse> {
    if let Some(url) = &input.reference_url {
        validate_url(url)?;
    }

    let theme = ThemeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Theme", id }))?;

    tracing::info!(theme_id = id, by = admin.user_id, "Theme updated");

    Ok(Json(DataResponse { data: theme }))
}

/// DELETE /api/admin/themes/:id
///
/// Soft-deactivate: submissions keep referencing the theme.
pub async fn deactivate(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deactivated = ThemeRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound { entity: "Theme", id }));
    }

    tracing::info!(theme_id = id, by = admin.user_id, "Theme deactivated");

    Ok(StatusCode::NO_CONTENT)
}
