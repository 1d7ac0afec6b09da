//! Tombstone model.

use forum_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from `deleted_projects`. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeletedProject {
    pub d_id: DbId,
    /// Identifier the project had while it was approved.
    pub p_id: DbId,
    pub name: String,
    pub description: String,
    pub creator_id: DbId,
    pub creator_name: String,
    pub deleted_date: Date,
    pub has_thumbnail: bool,
}
