//! Handlers for the `/deleted` tombstone listings.

use axum::extract::State;
use axum::Json;
use forum_db::models::deleted_project::DeletedProject;
use forum_db::repositories::DeletedProjectRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/deleted
pub async fn list_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DeletedProject>>>> {
    let deleted = DeletedProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(deleted)))
}

/// GET /api/v1/deleted/mine
///
/// Tombstones of projects the caller originally created.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DeletedProject>>>> {
    let deleted = DeletedProjectRepo::list_by_creator(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse::new(deleted)))
}
