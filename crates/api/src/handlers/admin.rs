//! Admin user management handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use palco_core::error::CoreError;
use palco_core::types::DbId;
use palco_db::models::user::CreateUser;
use palco_db::repositories::{RoleRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Role name: `admin`, `tutor`, or `actor`.
    pub role: String,
}

/// GET /api/admin/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/admin/users
///
/// Provision a platform user with the given role.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = RoleRepo::find_by_name(&state.pool, &input.role)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown role: {}",
                input.role
            )))
        })?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, role = %role.name, by = admin.user_id, "User created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// PUT /api/admin/users/:id/deactivate
///
/// Soft-deactivate a user. Their data stays; they can no longer log in.
pub async fn deactivate_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "Admins cannot deactivate their own account".into(),
        )));
    }

    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(user_id = id, by = admin.user_id, "User deactivated");

    Ok(StatusCode::NO_CONTENT)
}
