//! Handlers for `/projects/{id}/maintainers` and `/projects/{id}/contributors`.
//!
//! Both relations share request shapes; each route binds its [`MemberKind`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use forum_core::types::DbId;
use forum_db::models::member::{MemberKind, ProjectMember};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for adding a maintainer or contributor.
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: DbId,
    /// Display name to record. Defaults to the cached name.
    pub name: Option<String>,
}

async fn list(
    state: AppState,
    kind: MemberKind,
    project_id: DbId,
) -> AppResult<Json<DataResponse<Vec<ProjectMember>>>> {
    let members = state.engine.list_members(kind, project_id).await?;
    Ok(Json(DataResponse::new(members)))
}

async fn add(
    auth: AuthUser,
    state: AppState,
    kind: MemberKind,
    project_id: DbId,
    input: AddMemberRequest,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectMember>>)> {
    let member = state
        .engine
        .add_member(
            auth.user_id,
            kind,
            project_id,
            input.user_id,
            input.name.as_deref(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(member))))
}

async fn remove(
    auth: AuthUser,
    state: AppState,
    kind: MemberKind,
    project_id: DbId,
    user_id: DbId,
) -> AppResult<StatusCode> {
    state
        .engine
        .remove_member(auth.user_id, kind, project_id, user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Maintainers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/maintainers
pub async fn list_maintainers(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<ProjectMember>>>> {
    list(state, MemberKind::Maintainer, id).await
}

/// POST /api/v1/projects/{id}/maintainers
pub async fn add_maintainer(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AddMemberRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectMember>>)> {
    add(auth, state, MemberKind::Maintainer, id, input).await
}

/// DELETE /api/v1/projects/{id}/maintainers/{user_id}
pub async fn remove_maintainer(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((id, user_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    remove(auth, state, MemberKind::Maintainer, id, user_id).await
}

// ---------------------------------------------------------------------------
// Contributors
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/contributors
pub async fn list_contributors(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<ProjectMember>>>> {
    list(state, MemberKind::Contributor, id).await
}

/// POST /api/v1/projects/{id}/contributors
pub async fn add_contributor(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AddMemberRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectMember>>)> {
    add(auth, state, MemberKind::Contributor, id, input).await
}

/// DELETE /api/v1/projects/{id}/contributors/{user_id}
pub async fn remove_contributor(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((id, user_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    remove(auth, state, MemberKind::Contributor, id, user_id).await
}
