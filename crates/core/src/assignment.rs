//! Assignment/pool workflow state machine and tutor ranking policy.
//!
//! A pending submission is either in the shared pool (no tutor) or
//! assigned to one tutor. Once feedback lands the submission is
//! completed and the workflow is terminal -- there is no un-completing,
//! and completed submissions cannot be re-assigned.
//!
//! Feedback status is never stored; it is derived from whether a
//! feedback row is linked, so status and linkage cannot drift apart.

use chrono::Datelike;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Derived feedback status of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackStatus {
    Pending,
    Completed,
}

impl FeedbackStatus {
    /// A submission is completed iff it has a linked feedback row.
    pub fn of(feedback_id: Option<DbId>) -> Self {
        if feedback_id.is_some() {
            FeedbackStatus::Completed
        } else {
            FeedbackStatus::Pending
        }
    }
}

/// Workflow state derived from a submission's assignment and feedback links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentState {
    /// No tutor assigned, feedback pending -- sits in the shared pool.
    Pool,
    /// Assigned to a specific tutor, feedback pending.
    Assigned(DbId),
    /// Feedback delivered. Terminal.
    Completed,
}

impl AssignmentState {
    pub fn of(assigned_tutor_id: Option<DbId>, feedback_id: Option<DbId>) -> Self {
        if feedback_id.is_some() {
            AssignmentState::Completed
        } else {
            match assigned_tutor_id {
                Some(tutor_id) => AssignmentState::Assigned(tutor_id),
                None => AssignmentState::Pool,
            }
        }
    }
}

/// Validate an assignment mutation (assign, reassign, or return to pool).
///
/// Assignment is last-write-wins between the non-terminal states:
/// `Pool -> Assigned`, `Assigned -> Assigned'`, and `Assigned -> Pool` are
/// all allowed. Only `Completed` rejects.
pub fn validate_assignment(state: AssignmentState) -> Result<(), CoreError> {
    match state {
        AssignmentState::Completed => Err(CoreError::Conflict(
            "Submission already has feedback and can no longer be assigned".into(),
        )),
        AssignmentState::Pool | AssignmentState::Assigned(_) => Ok(()),
    }
}

/// Validate a pool claim: only unassigned pending submissions may be claimed.
pub fn validate_claim(state: AssignmentState) -> Result<(), CoreError> {
    match state {
        AssignmentState::Pool => Ok(()),
        AssignmentState::Assigned(_) => Err(CoreError::Conflict(
            "Submission has already been claimed by another tutor".into(),
        )),
        AssignmentState::Completed => Err(CoreError::Conflict(
            "Submission already has feedback".into(),
        )),
    }
}

/// Validate feedback completion: exactly one feedback per submission.
pub fn validate_completion(state: AssignmentState) -> Result<(), CoreError> {
    match state {
        AssignmentState::Completed => Err(CoreError::Conflict(
            "Submission already has feedback".into(),
        )),
        AssignmentState::Pool | AssignmentState::Assigned(_) => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tutor ranking
// ---------------------------------------------------------------------------

/// Per-tutor load aggregates used to rank assignment candidates.
#[derive(Debug, Clone, Serialize)]
pub struct TutorLoad {
    pub tutor_id: DbId,
    pub username: String,
    /// Pending submissions currently assigned to this tutor.
    pub pending_count: i64,
    /// Distinct actors this tutor has ever given feedback to.
    pub actors_tutored: i64,
    /// Whole months since the tutor account was created.
    pub tenure_months: i32,
    /// Lifetime delivered feedback count.
    pub completed_count: i64,
}

/// Rank candidate tutors for manual assignment, least-loaded first.
///
/// Sort keys, in order: ascending pending count, ascending distinct actors
/// tutored, then descending tenure and descending lifetime completed count
/// as tie-breaks (prefer the more seasoned tutor when load is equal).
pub fn rank_for_assignment(mut tutors: Vec<TutorLoad>) -> Vec<TutorLoad> {
    tutors.sort_by(|a, b| {
        a.pending_count
            .cmp(&b.pending_count)
            .then(a.actors_tutored.cmp(&b.actors_tutored))
            .then(b.tenure_months.cmp(&a.tenure_months))
            .then(b.completed_count.cmp(&a.completed_count))
    });
    tutors
}

/// Whole calendar months elapsed between `joined_at` and `now`.
pub fn tenure_months(joined_at: Timestamp, now: Timestamp) -> i32 {
    let mut months = (now.date_naive().year() - joined_at.date_naive().year()) * 12
        + (now.date_naive().month() as i32 - joined_at.date_naive().month() as i32);
    if now.date_naive().day() < joined_at.date_naive().day() {
        months -= 1;
    }
    months.max(0)
}
