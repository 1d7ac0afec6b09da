//! Handlers for the `/projects` resource.

use axum::extract::{Multipart, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use forum_core::error::CoreError;
use forum_core::project::ListingFilter;
use forum_core::types::DbId;
use forum_db::models::deleted_project::DeletedProject;
use forum_db::models::project::ApprovedProject;
use forum_db::repositories::ApprovedProjectRepo;
use serde::Deserialize;

use crate::engine::{NewProject, SubmitOutcome};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppMultipart, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// `ongoing`, `completed` (or `past`), `upcoming`, or `all`.
    pub status: Option<String>,
}

/// Request body for `PATCH /projects/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<DataResponse<Vec<ApprovedProject>>>> {
    let filter: ListingFilter = match params.status.as_deref() {
        Some(s) => s.parse()?,
        None => ListingFilter::default(),
    };
    let projects = ApprovedProjectRepo::list(&state.pool, filter.status()).await?;
    Ok(Json(DataResponse::new(projects)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<ApprovedProject>>> {
    let project = ApprovedProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse::new(project)))
}

/// GET /api/v1/projects/{id}/thumbnail
///
/// Raw image bytes. 404 if the project or its thumbnail is absent.
pub async fn thumbnail(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let bytes = ApprovedProjectRepo::find_thumbnail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Thumbnail",
            id,
        }))?;
    Ok(([(CONTENT_TYPE, sniff_image_type(&bytes))], bytes))
}

/// POST /api/v1/projects
///
/// Multipart form with `name`, `description` and an optional `thumbnail`
/// file. Returns 201 whether the project was queued or published.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<(StatusCode, Json<DataResponse<SubmitOutcome>>)> {
    let input = read_project_form(multipart).await?;
    let outcome = state.engine.submit_project(auth.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(outcome))))
}

/// POST /api/v1/projects/direct
pub async fn create_direct(
    auth: AuthUser,
    State(state): State<AppState>,
    AppMultipart(multipart): AppMultipart,
) -> AppResult<(StatusCode, Json<DataResponse<ApprovedProject>>)> {
    let input = read_project_form(multipart).await?;
    let project = state
        .engine
        .create_project_direct(auth.user_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(project))))
}

/// PATCH /api/v1/projects/{id}/status
pub async fn update_status(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateStatusRequest>,
) -> AppResult<Json<DataResponse<ApprovedProject>>> {
    let project = state
        .engine
        .update_project_status(auth.user_id, id, &input.status)
        .await?;
    Ok(Json(DataResponse::new(project)))
}

/// DELETE /api/v1/projects/{id}
///
/// Returns the tombstone that replaced the project.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<DeletedProject>>> {
    let tombstone = state.engine.delete_project(auth.user_id, id).await?;
    Ok(Json(DataResponse::new(tombstone)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Collect the project form fields. Unknown fields are ignored and an empty
/// thumbnail part counts as no thumbnail.
async fn read_project_form(mut multipart: Multipart) -> AppResult<NewProject> {
    let mut input = NewProject::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => {
                input.name = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "description" => {
                input.description = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "thumbnail" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !data.is_empty() {
                    input.thumbnail = Some(data.to_vec());
                }
            }
            _ => {}
        }
    }

    Ok(input)
}

/// Content type from magic bytes. Thumbnails are stored without one.
fn sniff_image_type(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "application/octet-stream",
    }
}
