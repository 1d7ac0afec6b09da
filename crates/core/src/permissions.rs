//! Boundary to the identity & permission store.
//!
//! The store is authoritative for admin/superadmin truth and is consulted on
//! every decision; implementations must not cache answers.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// Generic `(subject, namespace, role)` permission relation.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Does `subject` hold `role` in `namespace`?
    async fn has_permission(
        &self,
        subject: &str,
        namespace: &str,
        role: &str,
    ) -> Result<bool, CoreError>;

    /// Record a grant. Granting an existing triple is a no-op.
    async fn grant_permission(
        &self,
        subject: &str,
        namespace: &str,
        role: &str,
    ) -> Result<(), CoreError>;

    /// Remove a grant. Returns `false` if the triple was not present.
    async fn revoke_permission(
        &self,
        subject: &str,
        namespace: &str,
        role: &str,
    ) -> Result<bool, CoreError>;
}

/// Subject string used for a user id at the store boundary.
pub fn subject_for(user_id: DbId) -> String {
    user_id.to_string()
}

/// Does `user_id` hold the global `role` tier?
pub async fn holds_role(
    store: &dyn PermissionStore,
    user_id: DbId,
    role: Role,
) -> Result<bool, CoreError> {
    let (namespace, name) = role.grant();
    store
        .has_permission(&subject_for(user_id), namespace, name)
        .await
}

pub async fn grant_role(
    store: &dyn PermissionStore,
    user_id: DbId,
    role: Role,
) -> Result<(), CoreError> {
    let (namespace, name) = role.grant();
    store
        .grant_permission(&subject_for(user_id), namespace, name)
        .await
}

pub async fn revoke_role(
    store: &dyn PermissionStore,
    user_id: DbId,
    role: Role,
) -> Result<bool, CoreError> {
    let (namespace, name) = role.grant();
    store
        .revoke_permission(&subject_for(user_id), namespace, name)
        .await
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        grants: Mutex<HashSet<(String, String, String)>>,
    }

    fn key(subject: &str, namespace: &str, role: &str) -> (String, String, String) {
        (subject.to_string(), namespace.to_string(), role.to_string())
    }

    #[async_trait]
    impl PermissionStore for MemoryStore {
        async fn has_permission(&self, s: &str, n: &str, r: &str) -> Result<bool, CoreError> {
            Ok(self.grants.lock().unwrap().contains(&key(s, n, r)))
        }

        async fn grant_permission(&self, s: &str, n: &str, r: &str) -> Result<(), CoreError> {
            self.grants.lock().unwrap().insert(key(s, n, r));
            Ok(())
        }

        async fn revoke_permission(&self, s: &str, n: &str, r: &str) -> Result<bool, CoreError> {
            Ok(self.grants.lock().unwrap().remove(&key(s, n, r)))
        }
    }

    #[tokio::test]
    async fn test_role_helpers_use_namespace_triples() {
        let store = MemoryStore::default();
        assert!(!holds_role(&store, 5, Role::Admin).await.unwrap());

        grant_role(&store, 5, Role::Admin).await.unwrap();
        assert!(holds_role(&store, 5, Role::Admin).await.unwrap());
        assert!(store.has_permission("5", "admins", "member").await.unwrap());
        assert!(!holds_role(&store, 5, Role::Superadmin).await.unwrap());

        assert!(revoke_role(&store, 5, Role::Admin).await.unwrap());
        assert!(!revoke_role(&store, 5, Role::Admin).await.unwrap());
        assert!(!holds_role(&store, 5, Role::Admin).await.unwrap());
    }
}
