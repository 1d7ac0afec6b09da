//! Repository for the `names` display-name table.

use forum_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

pub struct NameRepo;

impl NameRepo {
    /// Set the display name for `id`, replacing any previous value.
    pub async fn upsert<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        name: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO names (id, name) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name",
        )
        .bind(id)
        .bind(name)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Display name for `id`, falling back to the username when no name row
    /// exists. `None` if neither is known.
    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>(
            "SELECT COALESCE(
                (SELECT name FROM names WHERE id = $1),
                (SELECT username FROM users WHERE id = $1)
             )",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
