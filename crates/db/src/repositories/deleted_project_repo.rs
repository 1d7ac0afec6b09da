//! Repository for the `deleted_projects` tombstone table.

use forum_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::deleted_project::DeletedProject;
use crate::models::project::ProjectContent;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "d_id, p_id, name, description, creator_id, creator_name, deleted_date, \
                       thumbnail IS NOT NULL AS has_thumbnail";

/// Append-only access to tombstones. There is no update or delete.
pub struct DeletedProjectRepo;

impl DeletedProjectRepo {
    /// Record the deletion of project `p_id`, dated today.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        p_id: DbId,
        content: &ProjectContent,
    ) -> Result<DeletedProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO deleted_projects
                (p_id, name, description, creator_id, creator_name, deleted_date, thumbnail)
             VALUES ($1, $2, $3, $4, $5, CURRENT_DATE, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeletedProject>(&query)
            .bind(p_id)
            .bind(&content.name)
            .bind(&content.description)
            .bind(content.creator_id)
            .bind(&content.creator_name)
            .bind(&content.thumbnail)
            .fetch_one(executor)
            .await
    }

    /// All tombstones, most recent deletion first.
    pub async fn list(pool: &PgPool) -> Result<Vec<DeletedProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM deleted_projects ORDER BY deleted_date DESC, d_id DESC"
        );
        sqlx::query_as::<_, DeletedProject>(&query)
            .fetch_all(pool)
            .await
    }

    /// Tombstones of projects originally created by `creator_id`.
    pub async fn list_by_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<Vec<DeletedProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM deleted_projects
             WHERE creator_id = $1
             ORDER BY deleted_date DESC, d_id DESC"
        );
        sqlx::query_as::<_, DeletedProject>(&query)
            .bind(creator_id)
            .fetch_all(pool)
            .await
    }

    /// Tombstones recorded for one original project identifier.
    pub async fn list_for_project(
        pool: &PgPool,
        p_id: DbId,
    ) -> Result<Vec<DeletedProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM deleted_projects WHERE p_id = $1 ORDER BY d_id ASC"
        );
        sqlx::query_as::<_, DeletedProject>(&query)
            .bind(p_id)
            .fetch_all(pool)
            .await
    }
}
