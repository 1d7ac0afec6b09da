//! Handlers for the `/roles` resource (global role grants).

use axum::extract::State;
use axum::Json;
use forum_core::types::DbId;
use serde::Deserialize;

use crate::engine::RoleChange;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for role changes.
#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    pub user_id: DbId,
    /// Display name to record for the target user.
    pub name: Option<String>,
}

/// POST /api/v1/roles/admin
pub async fn grant_admin(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<RoleRequest>,
) -> AppResult<Json<DataResponse<RoleChange>>> {
    let change = state
        .engine
        .grant_admin(auth.user_id, input.user_id, input.name.as_deref())
        .await?;
    Ok(Json(DataResponse::new(change)))
}

/// DELETE /api/v1/roles/admin
pub async fn revoke_admin(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<RoleRequest>,
) -> AppResult<Json<DataResponse<RoleChange>>> {
    let change = state
        .engine
        .revoke_admin(auth.user_id, input.user_id)
        .await?;
    Ok(Json(DataResponse::new(change)))
}

/// POST /api/v1/roles/superadmin
pub async fn grant_superadmin(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<RoleRequest>,
) -> AppResult<Json<DataResponse<RoleChange>>> {
    let change = state
        .engine
        .grant_superadmin(auth.user_id, input.user_id, input.name.as_deref())
        .await?;
    Ok(Json(DataResponse::new(change)))
}
