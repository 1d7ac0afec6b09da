//! Membership resolution: which relationships an actor holds.

use std::sync::Arc;

use forum_core::error::CoreError;
use forum_core::permissions::{holds_role, PermissionStore};
use forum_core::roles::{Membership, Role};
use forum_core::types::DbId;
use forum_db::models::member::MemberKind;
use forum_db::repositories::{ApprovedProjectRepo, MemberRepo, SubmissionRepo};
use forum_db::DbPool;

use crate::error::AppResult;

/// Combines permission-store lookups with project-table joins.
///
/// Holds no state between calls. Every answer comes fresh from the store.
#[derive(Clone)]
pub struct MembershipResolver {
    pool: DbPool,
    permissions: Arc<dyn PermissionStore>,
}

impl MembershipResolver {
    pub fn new(pool: DbPool, permissions: Arc<dyn PermissionStore>) -> Self {
        Self { pool, permissions }
    }

    /// Project-independent roles only.
    pub async fn global(&self, actor: DbId) -> AppResult<Membership> {
        let store = self.permissions.as_ref();
        let superadmin = holds_role(store, actor, Role::Superadmin).await?;
        let admin = holds_role(store, actor, Role::Admin).await?;
        Ok(Membership::global(superadmin, admin))
    }

    /// Global roles plus the actor's relationship to `project_id`.
    ///
    /// The creator is looked up in whichever collection holds the project.
    /// An identifier present in neither (including one that only survives
    /// as a tombstone) is `NotFound`.
    pub async fn for_project(&self, actor: DbId, project_id: DbId) -> AppResult<Membership> {
        let creator_id = match ApprovedProjectRepo::find_creator(&self.pool, project_id).await? {
            Some(id) => id,
            None => SubmissionRepo::find_creator(&self.pool, project_id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Project",
                    id: project_id,
                })?,
        };

        let mut membership = self.global(actor).await?;
        membership.creator = creator_id == actor;
        membership.maintainer =
            MemberRepo::exists(&self.pool, MemberKind::Maintainer, project_id, actor).await?;
        membership.contributor =
            MemberRepo::exists(&self.pool, MemberKind::Contributor, project_id, actor).await?;

        Ok(membership)
    }
}
