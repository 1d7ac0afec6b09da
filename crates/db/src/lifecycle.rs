//! Multi-step moves between the project collections.
//!
//! Each move runs in one transaction: either every step lands or none does.
//! Returning early drops the transaction, which rolls it back.

use forum_core::types::DbId;
use sqlx::PgPool;

use crate::models::deleted_project::DeletedProject;
use crate::models::member::{MemberKind, ProjectMember};
use crate::models::project::ApprovedProject;
use crate::repositories::{
    ApprovedProjectRepo, DeletedProjectRepo, MemberRepo, NameRepo, SubmissionRepo,
};

pub struct ProjectLifecycle;

impl ProjectLifecycle {
    /// Move a pending submission into the approved collection.
    ///
    /// Returns `None` if the submission does not exist or is no longer
    /// pending. Of two concurrent approvals exactly one gets `Some`.
    pub async fn approve(
        pool: &PgPool,
        r_id: DbId,
    ) -> Result<Option<ApprovedProject>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(content) = SubmissionRepo::take_pending(&mut *tx, r_id).await? else {
            return Ok(None);
        };
        let project = ApprovedProjectRepo::create(&mut *tx, &content).await?;

        tx.commit().await?;
        Ok(Some(project))
    }

    /// Replace an approved project with a tombstone.
    ///
    /// Membership rows go with the project via `ON DELETE CASCADE`.
    /// Returns `None` if the project does not exist.
    pub async fn delete(
        pool: &PgPool,
        p_id: DbId,
    ) -> Result<Option<DeletedProject>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(content) = ApprovedProjectRepo::lock_content(&mut *tx, p_id).await? else {
            return Ok(None);
        };
        let tombstone = DeletedProjectRepo::create(&mut *tx, p_id, &content).await?;
        if !ApprovedProjectRepo::delete(&mut *tx, p_id).await? {
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(tombstone))
    }

    /// Record the display name and insert the membership pair together.
    ///
    /// Returns `None` when the pair already exists; the name update is
    /// rolled back with it.
    pub async fn add_member(
        pool: &PgPool,
        kind: MemberKind,
        p_id: DbId,
        user_id: DbId,
        name: &str,
    ) -> Result<Option<ProjectMember>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        NameRepo::upsert(&mut *tx, user_id, name).await?;
        let Some(member) = MemberRepo::insert(&mut *tx, kind, p_id, user_id, name).await? else {
            return Ok(None);
        };

        tx.commit().await?;
        Ok(Some(member))
    }
}
