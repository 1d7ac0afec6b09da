//! Repository for the `maintainers` and `contributors` relation tables.
//!
//! Both tables share a shape, so one repository serves both, keyed by
//! [`MemberKind`].

use forum_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::member::{MemberKind, ProjectMember};

pub struct MemberRepo;

impl MemberRepo {
    /// Insert a `(p_id, user_id)` pair.
    ///
    /// Returns `None` when the pair already exists. The unique constraint
    /// decides, so two concurrent inserts cannot both succeed.
    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        kind: MemberKind,
        p_id: DbId,
        user_id: DbId,
        name: &str,
    ) -> Result<Option<ProjectMember>, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (p_id, user_id, name)
             VALUES ($1, $2, $3)
             ON CONFLICT (p_id, user_id) DO NOTHING
             RETURNING {id} AS id, p_id, user_id, name",
            table = kind.table(),
            id = kind.id_column(),
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(p_id)
            .bind(user_id)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Remove a pair. Returns `true` if a row was deleted.
    pub async fn remove(
        pool: &PgPool,
        kind: MemberKind,
        p_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE p_id = $1 AND user_id = $2",
            kind.table()
        );
        let result = sqlx::query(&query)
            .bind(p_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(
        pool: &PgPool,
        kind: MemberKind,
        p_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE p_id = $1 AND user_id = $2)",
            kind.table()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(p_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Members of one project in insertion order.
    pub async fn list(
        pool: &PgPool,
        kind: MemberKind,
        p_id: DbId,
    ) -> Result<Vec<ProjectMember>, sqlx::Error> {
        let query = format!(
            "SELECT {id} AS id, p_id, user_id, name FROM {table}
             WHERE p_id = $1
             ORDER BY {id} ASC",
            table = kind.table(),
            id = kind.id_column(),
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(p_id)
            .fetch_all(pool)
            .await
    }
}
