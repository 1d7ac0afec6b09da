use std::sync::Arc;

use forum_core::permissions::PermissionStore;

use crate::config::ServerConfig;
use crate::engine::LifecycleEngine;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: forum_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Authoritative source of admin/superadmin grants.
    pub permissions: Arc<dyn PermissionStore>,
    pub engine: LifecycleEngine,
}

impl AppState {
    /// Wire the state from its two roots: a pool and a config.
    ///
    /// The permission store and engine share the pool.
    pub fn new(pool: forum_db::DbPool, config: ServerConfig) -> Self {
        let permissions: Arc<dyn PermissionStore> =
            Arc::new(forum_db::permission_store::PgPermissionStore::new(pool.clone()));
        let engine = LifecycleEngine::new(pool.clone(), Arc::clone(&permissions));
        Self {
            pool,
            config: Arc::new(config),
            permissions,
            engine,
        }
    }
}
