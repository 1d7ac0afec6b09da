//! Route definitions for the `/projects` resource, including the
//! maintainer and contributor relations nested under each project.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::{members, project};
use crate::state::AppState;

/// Body limit for multipart uploads. Leaves headroom above the 2 MiB
/// thumbnail cap for the text fields and multipart framing.
pub const UPLOAD_BODY_LIMIT: usize = 3 * 1024 * 1024;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                 -> list (?status=)
/// POST   /                                 -> submit (multipart)
/// POST   /direct                           -> create_direct (multipart)
/// GET    /{id}                             -> get_by_id
/// DELETE /{id}                             -> delete
/// GET    /{id}/thumbnail                   -> thumbnail
/// PATCH  /{id}/status                      -> update_status
///
/// GET    /{id}/maintainers                 -> list_maintainers
/// POST   /{id}/maintainers                 -> add_maintainer
/// DELETE /{id}/maintainers/{user_id}       -> remove_maintainer
/// GET    /{id}/contributors                -> list_contributors
/// POST   /{id}/contributors                -> add_contributor
/// DELETE /{id}/contributors/{user_id}      -> remove_contributor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project::list)
                .post(project::submit)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/direct",
            post(project::create_direct).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/{id}", get(project::get_by_id).delete(project::delete))
        .route("/{id}/thumbnail", get(project::thumbnail))
        .route("/{id}/status", patch(project::update_status))
        .route(
            "/{id}/maintainers",
            get(members::list_maintainers).post(members::add_maintainer),
        )
        .route(
            "/{id}/maintainers/{user_id}",
            delete(members::remove_maintainer),
        )
        .route(
            "/{id}/contributors",
            get(members::list_contributors).post(members::add_contributor),
        )
        .route(
            "/{id}/contributors/{user_id}",
            delete(members::remove_contributor),
        )
}
