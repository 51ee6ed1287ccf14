//! Handlers for delivering and reading tutor feedback.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use palco_core::assignment::{validate_completion, AssignmentState};
use palco_core::error::CoreError;
use palco_core::roles::ROLE_ADMIN;
use palco_core::types::DbId;
use palco_core::validation::validate_url;
use palco_db::models::assignment_event::{NewAssignmentEvent, ACTION_COMPLETED};
use palco_db::models::feedback::CreateFeedback;
use palco_db::repositories::{AssignmentEventRepo, FeedbackRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::submissions::{authorize_read, find_submission};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireTutor};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/submissions/:id/feedback
///
/// Deliver feedback and complete the submission. Exactly one feedback per
/// submission: a second delivery is rejected with 409. Completing an
/// unclaimed pool submission implicitly claims it for the caller.
pub async fn complete_with_feedback(
    RequireTutor(user): RequireTutor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<impl IntoResponse> {
    let submission = find_submission(&state, id).await?;

    validate_completion(AssignmentState::of(
        submission.assigned_tutor_id,
        submission.feedback_id,
    ))?;
    authorize_completion(&user, submission.assigned_tutor_id)?;
    validate_url(&input.video_url)?;

    let feedback = FeedbackRepo::create_for_submission(
        &state.pool,
        id,
        user.user_id,
        submission.actor_id,
        &input,
    )
    .await?
    .ok_or_else(|| {
        // Lost a race against a concurrent completion.
        AppError::Core(CoreError::Conflict(
            "Submission already has feedback".into(),
        ))
    })?;

    AssignmentEventRepo::record(
        &state.pool,
        &NewAssignmentEvent {
            submission_id: id,
            actor_user_id: user.user_id,
            previous_tutor_id: submission.assigned_tutor_id,
            new_tutor_id: Some(user.user_id),
            action: ACTION_COMPLETED,
        },
    )
    .await?;

    tracing::info!(
        submission_id = id,
        feedback_id = feedback.id,
        tutor_id = user.user_id,
        "Feedback delivered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: feedback })))
}

/// GET /api/submissions/:id/feedback
///
/// Fetch the feedback for a submission. Visible to the owning actor, any
/// tutor, and admins. 404 while feedback is still pending.
pub async fn get_feedback(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = find_submission(&state, id).await?;
    authorize_read(&user, &submission)?;

    let feedback = FeedbackRepo::find_by_submission(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feedback",
            id,
        }))?;

    Ok(Json(DataResponse { data: feedback }))
}

/// GET /api/feedbacks/mine
///
/// All feedback delivered by the calling tutor, newest first.
pub async fn list_mine(
    RequireTutor(user): RequireTutor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let feedbacks = FeedbackRepo::list_for_tutor(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: feedbacks }))
}

/// The assigned tutor completes their own queue; an unassigned pool
/// submission may be completed by any tutor; admins may always complete.
fn authorize_completion(user: &AuthUser, assigned_tutor_id: Option<DbId>) -> AppResult<()> {
    if user.role == ROLE_ADMIN {
        return Ok(());
    }
    match assigned_tutor_id {
        Some(tutor_id) if tutor_id != user.user_id => Err(AppError::Core(CoreError::Forbidden(
            "Submission is assigned to another tutor".into(),
        ))),
        _ => Ok(()),
    }
}
