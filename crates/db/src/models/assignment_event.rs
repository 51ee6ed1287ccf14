//! Assignment audit trail model.
//!
//! Every assignment mutation (assign, reassign, return to pool, claim,
//! completion) appends a row here so admins can reconstruct who moved a
//! submission, when.

use serde::Serialize;
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

/// Audit action: tutor explicitly set (by admin or self).
pub const ACTION_ASSIGNED: &str = "assigned";
/// Audit action: submission returned to the shared pool.
pub const ACTION_RETURNED_TO_POOL: &str = "returned_to_pool";
/// Audit action: tutor claimed the submission from the pool.
pub const ACTION_CLAIMED: &str = "claimed";
/// Audit action: feedback delivered, workflow terminal.
pub const ACTION_COMPLETED: &str = "completed";

/// A row from the `assignment_events` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AssignmentEvent {
    pub id: DbId,
    pub submission_id: DbId,
    /// The user who performed the change (admin or tutor).
    pub actor_user_id: DbId,
    pub previous_tutor_id: Option<DbId>,
    pub new_tutor_id: Option<DbId>,
    pub action: String,
    pub created_at: Timestamp,
}

/// DTO for appending an audit row.
#[derive(Debug)]
pub struct NewAssignmentEvent {
    pub submission_id: DbId,
    pub actor_user_id: DbId,
    pub previous_tutor_id: Option<DbId>,
    pub new_tutor_id: Option<DbId>,
    pub action: &'static str,
}
