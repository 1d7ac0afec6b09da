//! Buffer (moderation queue) model.

use forum_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from `buffer_projects`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub r_id: DbId,
    pub name: String,
    pub description: String,
    pub creator_id: DbId,
    pub creator_name: String,
    /// `pending` or `rejected`.
    pub status: String,
    pub submitted_at: Timestamp,
    pub has_thumbnail: bool,
}
