//! Route definitions for the `/deleted` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::deleted;
use crate::state::AppState;

/// Routes mounted at `/deleted`.
///
/// ```text
/// GET /       -> list_all
/// GET /mine   -> list_mine
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(deleted::list_all))
        .route("/mine", get(deleted::list_mine))
}
