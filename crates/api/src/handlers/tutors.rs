//! Tutor candidate ranking for the admin assignment screen.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use palco_core::assignment::{rank_for_assignment, tenure_months, TutorLoad};
use palco_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/tutors/ranked
///
/// Active tutors ordered best-candidate-first for manual assignment:
/// least pending work, fewest actors already tutored, then most tenure
/// and most delivered feedback as tie-breaks.
pub async fn ranked(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let loads = UserRepo::list_tutor_loads(&state.pool)
        .await?
        .into_iter()
        .map(|row| TutorLoad {
            tutor_id: row.tutor_id,
            username: row.username,
            pending_count: row.pending_count,
            actors_tutored: row.actors_tutored,
            tenure_months: tenure_months(row.joined_at, now),
            completed_count: row.completed_count,
        })
        .collect();

    let ranked = rank_for_assignment(loads);
    Ok(Json(DataResponse { data: ranked }))
}
