//! Approved project model and the content shared by every project collection.

use forum_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from `approved_projects`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApprovedProject {
    pub p_id: DbId,
    pub name: String,
    pub description: String,
    pub creator_id: DbId,
    /// Creator display name as of publication. Not rewritten on rename.
    pub creator_name: String,
    pub start_date: Date,
    pub status: String,
    pub has_thumbnail: bool,
}

/// Fields carried unchanged when a project moves buffer -> approved -> deleted.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectContent {
    pub name: String,
    pub description: String,
    pub creator_id: DbId,
    pub creator_name: String,
    pub thumbnail: Option<Vec<u8>>,
}
