pub mod auth;
pub mod deleted;
pub mod health;
pub mod project;
pub mod roles;
pub mod submission;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current user (auth required)
///
/// /projects                                        list (?status=), submit (multipart)
/// /projects/direct                                 publish directly (multipart, admin)
/// /projects/{id}                                   get, delete
/// /projects/{id}/thumbnail                         raw thumbnail bytes
/// /projects/{id}/status                            update status (PATCH)
/// /projects/{id}/maintainers                       list, add
/// /projects/{id}/maintainers/{user_id}             remove
/// /projects/{id}/contributors                      list, add
/// /projects/{id}/contributors/{user_id}            remove
///
/// /submissions                                     pending queue (admin)
/// /submissions/mine                                caller's submissions
/// /submissions/{id}/approve                        approve (POST, admin)
/// /submissions/{id}/reject                         reject (POST, admin)
///
/// /deleted                                         all tombstones (public)
/// /deleted/mine                                    caller's tombstones
///
/// /roles/admin                                     grant, revoke (superadmin)
/// /roles/superadmin                                grant (superadmin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/submissions", submission::router())
        .nest("/deleted", deleted::router())
        .nest("/roles", roles::router())
}
