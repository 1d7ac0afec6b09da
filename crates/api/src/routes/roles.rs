//! Route definitions for the `/roles` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// POST   /admin        -> grant_admin
/// DELETE /admin        -> revoke_admin
/// POST   /superadmin   -> grant_superadmin
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin",
            post(roles::grant_admin).delete(roles::revoke_admin),
        )
        .route("/superadmin", post(roles::grant_superadmin))
}
