//! Handlers for the `/submissions` moderation queue.

use axum::extract::State;
use axum::Json;
use forum_core::types::DbId;
use forum_db::models::project::ApprovedProject;
use forum_db::models::submission::Submission;
use forum_db::repositories::SubmissionRepo;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/submissions
///
/// Pending submissions, oldest first. Admins and superadmins only.
pub async fn list_pending(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    let pending = state.engine.pending_submissions(auth.user_id).await?;
    Ok(Json(DataResponse::new(pending)))
}

/// GET /api/v1/submissions/mine
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    let mine = SubmissionRepo::list_by_creator(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse::new(mine)))
}

/// POST /api/v1/submissions/{id}/approve
pub async fn approve(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<ApprovedProject>>> {
    let project = state.engine.approve_submission(auth.user_id, id).await?;
    Ok(Json(DataResponse::new(project)))
}

/// POST /api/v1/submissions/{id}/reject
pub async fn reject(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Submission>>> {
    let submission = state.engine.reject_submission(auth.user_id, id).await?;
    Ok(Json(DataResponse::new(submission)))
}
