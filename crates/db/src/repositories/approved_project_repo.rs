//! Repository for the `approved_projects` table.

use forum_core::project::ProjectStatus;
use forum_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::project::{ApprovedProject, ProjectContent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "p_id, name, description, creator_id, creator_name, start_date, status, \
                       thumbnail IS NOT NULL AS has_thumbnail";

/// Provides operations on published projects.
pub struct ApprovedProjectRepo;

impl ApprovedProjectRepo {
    /// Publish `content` with a fresh identifier, today's start date, and
    /// status `in_progress`.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        content: &ProjectContent,
    ) -> Result<ApprovedProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO approved_projects
                (name, description, creator_id, creator_name, start_date, status, thumbnail)
             VALUES ($1, $2, $3, $4, CURRENT_DATE, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApprovedProject>(&query)
            .bind(&content.name)
            .bind(&content.description)
            .bind(content.creator_id)
            .bind(&content.creator_name)
            .bind(ProjectStatus::InProgress.as_str())
            .bind(&content.thumbnail)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ApprovedProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM approved_projects WHERE p_id = $1");
        sqlx::query_as::<_, ApprovedProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects, optionally restricted to one status, newest first.
    pub async fn list(
        pool: &PgPool,
        status: Option<ProjectStatus>,
    ) -> Result<Vec<ApprovedProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM approved_projects
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY start_date DESC, p_id DESC"
        );
        sqlx::query_as::<_, ApprovedProject>(&query)
            .bind(status.map(ProjectStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// Creator of an approved project, if the project exists.
    pub async fn find_creator(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT creator_id FROM approved_projects WHERE p_id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set the status of a project. Returns `None` if no row matches.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ProjectStatus,
    ) -> Result<Option<ApprovedProject>, sqlx::Error> {
        let query = format!(
            "UPDATE approved_projects SET status = $2
             WHERE p_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApprovedProject>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Read the full content of a project and lock the row until the
    /// surrounding transaction ends.
    pub async fn lock_content<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<ProjectContent>, sqlx::Error> {
        sqlx::query_as::<_, ProjectContent>(
            "SELECT name, description, creator_id, creator_name, thumbnail
             FROM approved_projects
             WHERE p_id = $1
             FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Remove a project row. Returns `true` if a row was removed.
    pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM approved_projects WHERE p_id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Thumbnail bytes. Outer `None`: no such project; inner `None`: no thumbnail.
    pub async fn find_thumbnail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Option<Vec<u8>>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<Vec<u8>>>(
            "SELECT thumbnail FROM approved_projects WHERE p_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
