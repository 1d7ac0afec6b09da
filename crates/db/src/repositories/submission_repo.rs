//! Repository for the `buffer_projects` table (the moderation queue).

use forum_core::project::SubmissionStatus;
use forum_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::project::ProjectContent;
use crate::models::submission::Submission;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "r_id, name, description, creator_id, creator_name, status, submitted_at, \
                       thumbnail IS NOT NULL AS has_thumbnail";

/// Provides operations on submitted projects.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Queue `content` for moderation with status `pending`.
    pub async fn create(
        pool: &PgPool,
        content: &ProjectContent,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO buffer_projects
                (name, description, creator_id, creator_name, status, thumbnail)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&content.name)
            .bind(&content.description)
            .bind(content.creator_id)
            .bind(&content.creator_name)
            .bind(SubmissionStatus::Pending.as_str())
            .bind(&content.thumbnail)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buffer_projects WHERE r_id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Pending submissions, oldest first.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM buffer_projects
             WHERE status = $1
             ORDER BY submitted_at ASC, r_id ASC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(SubmissionStatus::Pending.as_str())
            .fetch_all(pool)
            .await
    }

    /// Every submission by one creator still held in the buffer, newest first.
    pub async fn list_by_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM buffer_projects
             WHERE creator_id = $1
             ORDER BY submitted_at DESC, r_id DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(creator_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_creator(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT creator_id FROM buffer_projects WHERE r_id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Remove a pending submission and hand back its content.
    ///
    /// Returns `None` when the row is absent or no longer pending, which is
    /// also what a concurrent moderator that lost the race observes.
    pub async fn take_pending<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<ProjectContent>, sqlx::Error> {
        sqlx::query_as::<_, ProjectContent>(
            "DELETE FROM buffer_projects
             WHERE r_id = $1 AND status = $2
             RETURNING name, description, creator_id, creator_name, thumbnail",
        )
        .bind(id)
        .bind(SubmissionStatus::Pending.as_str())
        .fetch_optional(executor)
        .await
    }

    /// Flip a pending submission to `rejected` in place.
    ///
    /// The `pending` precondition is re-checked, so rejecting twice yields
    /// `None` on the second call.
    pub async fn reject(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE buffer_projects SET status = $3
             WHERE r_id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(SubmissionStatus::Pending.as_str())
            .bind(SubmissionStatus::Rejected.as_str())
            .fetch_optional(pool)
            .await
    }
}
