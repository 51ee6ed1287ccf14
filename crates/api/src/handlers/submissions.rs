//! Handlers for the submission workflow: actor uploads, pool/queue views,
//! tutor assignment, and the assignment audit trail.
//!
//! Responses use [`SubmissionView`], a read-time projection that adds the
//! derived feedback status, the computed deadline, and a countdown
//! snapshot. Neither status nor deadline is ever stored (see
//! `palco_db::models::submission`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use palco_core::assignment::{
    validate_assignment, validate_claim, AssignmentState, FeedbackStatus,
};
use palco_core::deadline::{countdown, feedback_deadline, Countdown};
use palco_core::error::CoreError;
use palco_core::roles::{ROLE_ACTOR, ROLE_ADMIN, ROLE_TUTOR};
use palco_core::types::{DbId, Timestamp};
use palco_core::validation::validate_tape_urls;
use palco_db::models::assignment_event::{
    NewAssignmentEvent, ACTION_ASSIGNED, ACTION_CLAIMED, ACTION_RETURNED_TO_POOL,
};
use palco_db::models::submission::{CreateSubmission, Submission};
use palco_db::repositories::{AssignmentEventRepo, RoleRepo, SubmissionRepo, ThemeRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireTutor};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Read-time projection of a submission with its derived fields.
#[derive(Debug, Serialize)]
pub struct SubmissionView {
    #[serde(flatten)]
    pub submission: Submission,
    pub feedback_status: FeedbackStatus,
    /// Feedback due instant (UTC), 7 business days after submission at
    /// 18:00 platform-local time.
    pub deadline: Timestamp,
    /// Remaining-time snapshot as of this response.
    pub countdown: Countdown,
}

/// Project a submission row into its API view.
///
/// Deadline math runs in platform-local wall time: shift the stored UTC
/// instant by the configured offset, compute, and shift back.
pub(crate) fn project(submission: Submission, tz_offset_hours: i64) -> SubmissionView {
    let offset = Duration::hours(tz_offset_hours);

    let created_local = submission.created_at.naive_utc() + offset;
    let deadline_local = feedback_deadline(created_local);
    let deadline = DateTime::<Utc>::from_naive_utc_and_offset(deadline_local - offset, Utc);

    let now_local = Utc::now().naive_utc() + offset;
    let countdown = countdown(deadline_local, now_local);

    SubmissionView {
        feedback_status: FeedbackStatus::of(submission.feedback_id),
        deadline,
        countdown,
        submission,
    }
}

fn project_all(submissions: Vec<Submission>, tz_offset_hours: i64) -> Vec<SubmissionView> {
    submissions
        .into_iter()
        .map(|s| project(s, tz_offset_hours))
        .collect()
}

// ---------------------------------------------------------------------------
// Actor endpoints
// ---------------------------------------------------------------------------

/// POST /api/submissions
///
/// Actor uploads a self-tape for a theme. The theme must exist and be open
/// for submissions; every tape URL must be well-formed.
pub async fn create_submission(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateSubmission>,
) -> AppResult<impl IntoResponse> {
    if user.role != ROLE_ACTOR {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only actors can submit self-tapes".into(),
        )));
    }

    validate_tape_urls(&input.tape_urls)?;

    let theme = ThemeRepo::find_by_id(&state.pool, input.theme_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Theme",
            id: input.theme_id,
        }))?;
    if !theme.is_open(Utc::now()) {
        return Err(AppError::Core(CoreError::Validation(
            "Theme is closed for submissions".into(),
        )));
    }

    let submission = SubmissionRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        submission_id = submission.id,
        theme_id = submission.theme_id,
        actor_id = user.user_id,
        tapes = submission.tape_urls.len(),
        "Submission created",
    );

    let view = project(submission, state.config.tz_offset_hours);
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// GET /api/submissions/mine
///
/// The authenticated actor's own submissions, newest first.
pub async fn list_mine(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let submissions = SubmissionRepo::list_for_actor(&state.pool, user.user_id).await?;
    let views = project_all(submissions, state.config.tz_offset_hours);
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/submissions/:id
///
/// Submission detail with deadline and countdown snapshot. Visible to the
/// owning actor, any tutor, and admins.
pub async fn get_submission(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = find_submission(&state, id).await?;
    authorize_read(&user, &submission)?;

    let view = project(submission, state.config.tz_offset_hours);
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Pool / queue views
// ---------------------------------------------------------------------------

/// GET /api/submissions/pool
///
/// The shared pool: pending submissions with no assigned tutor, oldest
/// first (rough FIFO fairness).
pub async fn pool(
    RequireTutor(_user): RequireTutor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let submissions = SubmissionRepo::unassigned_pending(&state.pool).await?;
    let views = project_all(submissions, state.config.tz_offset_hours);
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/submissions/assigned
///
/// Pending submissions already assigned to a tutor, soonest due first.
pub async fn assigned(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let submissions = SubmissionRepo::assigned_pending(&state.pool).await?;
    let mut views = project_all(submissions, state.config.tz_offset_hours);
    views.sort_by_key(|v| v.deadline);
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/submissions/queue
///
/// The calling tutor's working queue: their own pending assignments plus
/// the open pool.
pub async fn queue(
    RequireTutor(user): RequireTutor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let submissions = SubmissionRepo::pending_for_tutor(&state.pool, user.user_id).await?;
    let views = project_all(submissions, state.config.tz_offset_hours);
    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// Assignment mutations
// ---------------------------------------------------------------------------

/// Request body for `PUT /api/submissions/:id/tutor`.
#[derive(Debug, Deserialize)]
pub struct AssignTutorRequest {
    /// Target tutor, or `null` to return the submission to the pool.
    pub tutor_id: Option<DbId>,
}

/// PUT /api/submissions/:id/tutor
///
/// Set or clear the assigned tutor (last-write-wins). Admins may assign
/// anyone; a tutor may only assign themself or return their own
/// assignment to the pool.
pub async fn assign_tutor(
    RequireTutor(user): RequireTutor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignTutorRequest>,
) -> AppResult<impl IntoResponse> {
    let submission = find_submission(&state, id).await?;
    let previous = submission.assigned_tutor_id;

    authorize_assignment(&user, &submission, input.tutor_id)?;

    let assignment_state = AssignmentState::of(previous, submission.feedback_id);
    validate_assignment(assignment_state)?;

    if let Some(tutor_id) = input.tutor_id {
        ensure_is_tutor(&state, tutor_id).await?;
    }

    let updated = SubmissionRepo::assign_tutor(&state.pool, id, input.tutor_id)
        .await?
        .ok_or_else(|| {
            // Lost a race against feedback completion.
            AppError::Core(CoreError::Conflict(
                "Submission already has feedback and can no longer be assigned".into(),
            ))
        })?;

    let action = if input.tutor_id.is_some() {
        ACTION_ASSIGNED
    } else {
        ACTION_RETURNED_TO_POOL
    };
    AssignmentEventRepo::record(
        &state.pool,
        &NewAssignmentEvent {
            submission_id: id,
            actor_user_id: user.user_id,
            previous_tutor_id: previous,
            new_tutor_id: input.tutor_id,
            action,
        },
    )
    .await?;

    tracing::info!(
        submission_id = id,
        previous_tutor = ?previous,
        new_tutor = ?input.tutor_id,
        by = user.user_id,
        "Submission assignment changed",
    );

    let view = project(updated, state.config.tz_offset_hours);
    Ok(Json(DataResponse { data: view }))
}

/// POST /api/submissions/:id/claim
///
/// Tutor claims an unassigned submission from the pool. Conflicts when the
/// submission was already claimed or completed.
pub async fn claim(
    RequireTutor(user): RequireTutor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = find_submission(&state, id).await?;
    validate_claim(AssignmentState::of(
        submission.assigned_tutor_id,
        submission.feedback_id,
    ))?;

    let updated = SubmissionRepo::claim_from_pool(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| {
            // Another tutor got there between the read and the update.
            AppError::Core(CoreError::Conflict(
                "Submission has already been claimed by another tutor".into(),
            ))
        })?;

    AssignmentEventRepo::record(
        &state.pool,
        &NewAssignmentEvent {
            submission_id: id,
            actor_user_id: user.user_id,
            previous_tutor_id: None,
            new_tutor_id: Some(user.user_id),
            action: ACTION_CLAIMED,
        },
    )
    .await?;

    tracing::info!(submission_id = id, tutor_id = user.user_id, "Submission claimed from pool");

    let view = project(updated, state.config.tz_offset_hours);
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/submissions/:id/history
///
/// Assignment audit trail for a submission, oldest first.
pub async fn history(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // 404 for unknown submissions rather than an empty history.
    find_submission(&state, id).await?;

    let events = AssignmentEventRepo::list_for_submission(&state.pool, id).await?;
    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) async fn find_submission(state: &AppState, id: DbId) -> AppResult<Submission> {
    SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))
}

/// Actors may only read their own submissions; tutors and admins see all.
pub(crate) fn authorize_read(user: &AuthUser, submission: &Submission) -> AppResult<()> {
    if user.role == ROLE_ADMIN || user.role == ROLE_TUTOR || submission.actor_id == user.user_id {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "You may only view your own submissions".into(),
        )))
    }
}

/// Admins may set any tutor; a tutor may only take the submission themself
/// or release their own assignment back to the pool.
fn authorize_assignment(
    user: &AuthUser,
    submission: &Submission,
    target: Option<DbId>,
) -> AppResult<()> {
    if user.role == ROLE_ADMIN {
        return Ok(());
    }
    let allowed = match target {
        Some(tutor_id) => tutor_id == user.user_id,
        None => submission.assigned_tutor_id == Some(user.user_id),
    };
    if allowed {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Tutors may only assign themselves or release their own assignments".into(),
        )))
    }
}

/// Validate that the target user exists and actually holds the tutor role.
async fn ensure_is_tutor(state: &AppState, tutor_id: DbId) -> AppResult<()> {
    let target = UserRepo::find_by_id(&state.pool, tutor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tutor",
            id: tutor_id,
        }))?;
    let role = RoleRepo::resolve_name(&state.pool, target.role_id).await?;
    if role != ROLE_TUTOR {
        return Err(AppError::Core(CoreError::Validation(format!(
            "User {tutor_id} is not a tutor"
        ))));
    }
    Ok(())
}
