//! Route definitions for the `/submissions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submission;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// GET  /               -> list_pending (admin)
/// GET  /mine           -> list_mine
/// POST /{id}/approve   -> approve (admin)
/// POST /{id}/reject    -> reject (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(submission::list_pending))
        .route("/mine", get(submission::list_mine))
        .route("/{id}/approve", post(submission::approve))
        .route("/{id}/reject", post(submission::reject))
}
