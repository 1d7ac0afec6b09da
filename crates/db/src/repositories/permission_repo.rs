//! Repository for the `permissions` triple table.

use sqlx::PgPool;

pub struct PermissionRepo;

impl PermissionRepo {
    pub async fn has(
        pool: &PgPool,
        subject: &str,
        namespace: &str,
        role: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM permissions
                WHERE subject = $1 AND namespace = $2 AND role = $3
             )",
        )
        .bind(subject)
        .bind(namespace)
        .bind(role)
        .fetch_one(pool)
        .await
    }

    /// Record a grant. Granting an existing triple is a no-op.
    pub async fn grant(
        pool: &PgPool,
        subject: &str,
        namespace: &str,
        role: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO permissions (subject, namespace, role) VALUES ($1, $2, $3)
             ON CONFLICT DO NOTHING",
        )
        .bind(subject)
        .bind(namespace)
        .bind(role)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a grant. Returns `true` if one existed.
    pub async fn revoke(
        pool: &PgPool,
        subject: &str,
        namespace: &str,
        role: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM permissions WHERE subject = $1 AND namespace = $2 AND role = $3",
        )
        .bind(subject)
        .bind(namespace)
        .bind(role)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
