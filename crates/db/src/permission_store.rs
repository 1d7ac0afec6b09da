//! PostgreSQL-backed [`PermissionStore`].

use async_trait::async_trait;
use forum_core::error::CoreError;
use forum_core::permissions::PermissionStore;

use crate::repositories::PermissionRepo;
use crate::DbPool;

/// Permission store over the `permissions` table. Every call hits the
/// database; nothing is cached.
#[derive(Clone)]
pub struct PgPermissionStore {
    pool: DbPool,
}

impl PgPermissionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("permission store: {err}"))
}

#[async_trait]
impl PermissionStore for PgPermissionStore {
    async fn has_permission(
        &self,
        subject: &str,
        namespace: &str,
        role: &str,
    ) -> Result<bool, CoreError> {
        PermissionRepo::has(&self.pool, subject, namespace, role)
            .await
            .map_err(store_error)
    }

    async fn grant_permission(
        &self,
        subject: &str,
        namespace: &str,
        role: &str,
    ) -> Result<(), CoreError> {
        PermissionRepo::grant(&self.pool, subject, namespace, role)
            .await
            .map_err(store_error)
    }

    async fn revoke_permission(
        &self,
        subject: &str,
        namespace: &str,
        role: &str,
    ) -> Result<bool, CoreError> {
        PermissionRepo::revoke(&self.pool, subject, namespace, role)
            .await
            .map_err(store_error)
    }
}
