//! The lifecycle engine: every mutating operation on projects and roles.
//!
//! Each entry point runs the same pipeline: request-shaped validation that
//! needs no I/O, membership resolution, the policy decision, and finally the
//! store operation (transactional where it spans tables).

use std::sync::Arc;

use forum_core::error::CoreError;
use forum_core::permissions::{grant_role, revoke_role, PermissionStore};
use forum_core::policy::{authorize, publishes_directly, Action};
use forum_core::project::ProjectStatus;
use forum_core::roles::Role;
use forum_core::types::DbId;
use forum_core::validation::{
    validate_description, validate_display_name, validate_project_name, validate_thumbnail,
};
use forum_db::lifecycle::ProjectLifecycle;
use forum_db::models::deleted_project::DeletedProject;
use forum_db::models::member::{MemberKind, ProjectMember};
use forum_db::models::project::{ApprovedProject, ProjectContent};
use forum_db::models::submission::Submission;
use forum_db::repositories::{
    ApprovedProjectRepo, MemberRepo, NameRepo, SubmissionRepo, UserRepo,
};
use forum_db::DbPool;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::engine::membership::MembershipResolver;
use crate::error::AppResult;

/// Caller-supplied fields of a new project.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub thumbnail: Option<Vec<u8>>,
}

impl NewProject {
    fn validate(&self) -> Result<(), CoreError> {
        validate_project_name(&self.name)?;
        validate_description(&self.description)?;
        validate_thumbnail(self.thumbnail.as_deref())
    }

    fn into_content(self, creator_id: DbId, creator_name: String) -> ProjectContent {
        ProjectContent {
            name: self.name.trim().to_string(),
            description: self.description,
            creator_id,
            creator_name,
            thumbnail: self.thumbnail,
        }
    }
}

/// Where a submitted project ended up.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Queued for moderation.
    Pending(Submission),
    /// Published straight away by a privileged submitter.
    Published(ApprovedProject),
}

/// Result of a role grant or revocation.
#[derive(Debug, Clone, Serialize)]
pub struct RoleChange {
    pub user_id: DbId,
    pub role: Role,
    pub granted: bool,
}

#[derive(Clone)]
pub struct LifecycleEngine {
    pool: DbPool,
    permissions: Arc<dyn PermissionStore>,
    resolver: MembershipResolver,
}

impl LifecycleEngine {
    pub fn new(pool: DbPool, permissions: Arc<dyn PermissionStore>) -> Self {
        let resolver = MembershipResolver::new(pool.clone(), Arc::clone(&permissions));
        Self {
            pool,
            permissions,
            resolver,
        }
    }

    pub fn resolver(&self) -> &MembershipResolver {
        &self.resolver
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// Submit a project. Admins and superadmins publish directly; everyone
    /// else lands in the moderation queue.
    pub async fn submit_project(&self, actor: DbId, input: NewProject) -> AppResult<SubmitOutcome> {
        input.validate()?;
        let membership = self.resolver.global(actor).await?;
        authorize(&membership, Action::SubmitProject)?;

        let content = input.into_content(actor, self.display_name(actor).await?);
        if publishes_directly(&membership) {
            let project = ApprovedProjectRepo::create(&self.pool, &content).await?;
            info!(actor, project_id = project.p_id, "Project published directly");
            return Ok(SubmitOutcome::Published(project));
        }

        let submission = SubmissionRepo::create(&self.pool, &content).await?;
        info!(actor, submission_id = submission.r_id, "Project submitted for review");
        Ok(SubmitOutcome::Pending(submission))
    }

    /// Publish without going through the queue. Privileged callers only.
    pub async fn create_project_direct(
        &self,
        actor: DbId,
        input: NewProject,
    ) -> AppResult<ApprovedProject> {
        input.validate()?;
        let membership = self.resolver.global(actor).await?;
        authorize(&membership, Action::CreateProjectDirect)?;

        let content = input.into_content(actor, self.display_name(actor).await?);
        let project = ApprovedProjectRepo::create(&self.pool, &content).await?;
        info!(actor, project_id = project.p_id, "Project created directly");
        Ok(project)
    }

    pub async fn update_project_status(
        &self,
        actor: DbId,
        project_id: DbId,
        status: &str,
    ) -> AppResult<ApprovedProject> {
        let status: ProjectStatus = status.parse()?;
        let membership = self.resolver.for_project(actor, project_id).await?;
        authorize(&membership, Action::UpdateProjectStatus)?;

        let project = ApprovedProjectRepo::update_status(&self.pool, project_id, status)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            })?;
        info!(actor, project_id, status = %status, "Project status updated");
        Ok(project)
    }

    /// Move an approved project to the tombstone collection.
    pub async fn delete_project(&self, actor: DbId, project_id: DbId) -> AppResult<DeletedProject> {
        let membership = self.resolver.for_project(actor, project_id).await?;
        authorize(&membership, Action::DeleteProject)?;

        let tombstone = ProjectLifecycle::delete(&self.pool, project_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            })?;
        info!(actor, project_id, tombstone_id = tombstone.d_id, "Project deleted");
        Ok(tombstone)
    }

    // -----------------------------------------------------------------------
    // Moderation
    // -----------------------------------------------------------------------

    /// The moderation queue. Visible to admins and superadmins.
    pub async fn pending_submissions(&self, actor: DbId) -> AppResult<Vec<Submission>> {
        let membership = self.resolver.global(actor).await?;
        authorize(&membership, Action::ModerateSubmission)?;
        Ok(SubmissionRepo::list_pending(&self.pool).await?)
    }

    pub async fn approve_submission(
        &self,
        actor: DbId,
        submission_id: DbId,
    ) -> AppResult<ApprovedProject> {
        let membership = self.resolver.global(actor).await?;
        authorize(&membership, Action::ModerateSubmission)?;

        let Some(project) = ProjectLifecycle::approve(&self.pool, submission_id).await? else {
            debug!(actor, submission_id, "Submission absent or already resolved");
            return Err(CoreError::NotFound {
                entity: "Submission",
                id: submission_id,
            }
            .into());
        };
        info!(
            actor,
            submission_id,
            project_id = project.p_id,
            "Submission approved"
        );
        Ok(project)
    }

    /// Reject a pending submission. The row stays in the queue as `rejected`;
    /// rejecting it again is `NotFound`.
    pub async fn reject_submission(
        &self,
        actor: DbId,
        submission_id: DbId,
    ) -> AppResult<Submission> {
        let membership = self.resolver.global(actor).await?;
        authorize(&membership, Action::ModerateSubmission)?;

        let Some(submission) = SubmissionRepo::reject(&self.pool, submission_id).await? else {
            debug!(actor, submission_id, "Submission absent or already resolved");
            return Err(CoreError::NotFound {
                entity: "Submission",
                id: submission_id,
            }
            .into());
        };
        info!(actor, submission_id, "Submission rejected");
        Ok(submission)
    }

    // -----------------------------------------------------------------------
    // Maintainers and contributors
    // -----------------------------------------------------------------------

    /// Add `user_id` as a maintainer or contributor of an approved project.
    ///
    /// When `name` is given it replaces the cached display name; otherwise
    /// the cached name (or username) is used.
    pub async fn add_member(
        &self,
        actor: DbId,
        kind: MemberKind,
        project_id: DbId,
        user_id: DbId,
        name: Option<&str>,
    ) -> AppResult<ProjectMember> {
        if let Some(name) = name {
            validate_display_name(name)?;
        }
        let membership = self.resolver.for_project(actor, project_id).await?;
        authorize(&membership, manage_action(kind))?;

        self.ensure_approved(project_id).await?;
        self.ensure_user(user_id).await?;
        let name = match name {
            Some(name) => name.trim().to_string(),
            None => self.display_name(user_id).await?,
        };

        let member = ProjectLifecycle::add_member(&self.pool, kind, project_id, user_id, &name)
            .await?
            .ok_or_else(|| {
                CoreError::AlreadyExists(format!(
                    "User {user_id} is already a {} of project {project_id}",
                    kind.entity().to_lowercase()
                ))
            })?;
        info!(actor, project_id, user_id, relation = kind.table(), "Member added");
        Ok(member)
    }

    pub async fn remove_member(
        &self,
        actor: DbId,
        kind: MemberKind,
        project_id: DbId,
        user_id: DbId,
    ) -> AppResult<()> {
        let membership = self.resolver.for_project(actor, project_id).await?;
        authorize(&membership, manage_action(kind))?;

        if !MemberRepo::remove(&self.pool, kind, project_id, user_id).await? {
            return Err(CoreError::NotFound {
                entity: kind.entity(),
                id: user_id,
            }
            .into());
        }
        info!(actor, project_id, user_id, relation = kind.table(), "Member removed");
        Ok(())
    }

    /// Public listing of one relation for an approved project.
    pub async fn list_members(
        &self,
        kind: MemberKind,
        project_id: DbId,
    ) -> AppResult<Vec<ProjectMember>> {
        self.ensure_approved(project_id).await?;
        Ok(MemberRepo::list(&self.pool, kind, project_id).await?)
    }

    // -----------------------------------------------------------------------
    // Global roles
    // -----------------------------------------------------------------------

    pub async fn grant_admin(
        &self,
        actor: DbId,
        user_id: DbId,
        name: Option<&str>,
    ) -> AppResult<RoleChange> {
        self.grant(actor, Action::ManageAdmins, Role::Admin, user_id, name)
            .await
    }

    pub async fn grant_superadmin(
        &self,
        actor: DbId,
        user_id: DbId,
        name: Option<&str>,
    ) -> AppResult<RoleChange> {
        self.grant(actor, Action::GrantSuperadmin, Role::Superadmin, user_id, name)
            .await
    }

    /// Revoke the admin role. Revoking a grant that does not exist is
    /// `NotFound`.
    pub async fn revoke_admin(&self, actor: DbId, user_id: DbId) -> AppResult<RoleChange> {
        let membership = self.resolver.global(actor).await?;
        authorize(&membership, Action::ManageAdmins)?;
        self.ensure_user(user_id).await?;

        if !revoke_role(self.permissions.as_ref(), user_id, Role::Admin).await? {
            return Err(CoreError::NotFound {
                entity: "Admin grant",
                id: user_id,
            }
            .into());
        }
        info!(actor, user_id, role = Role::Admin.as_str(), "Role revoked");
        Ok(RoleChange {
            user_id,
            role: Role::Admin,
            granted: false,
        })
    }

    /// Grant superadmin to the named user at startup, without an acting user.
    ///
    /// Returns the user id, or `None` when no such user exists yet.
    pub async fn bootstrap_superadmin(&self, username: &str) -> AppResult<Option<DbId>> {
        let Some(user) = UserRepo::find_by_username(&self.pool, username).await? else {
            warn!(username, "Bootstrap superadmin not found; skipping");
            return Ok(None);
        };
        grant_role(self.permissions.as_ref(), user.id, Role::Superadmin).await?;
        info!(user_id = user.id, username, "Bootstrap superadmin granted");
        Ok(Some(user.id))
    }

    async fn grant(
        &self,
        actor: DbId,
        action: Action,
        role: Role,
        user_id: DbId,
        name: Option<&str>,
    ) -> AppResult<RoleChange> {
        if let Some(name) = name {
            validate_display_name(name)?;
        }
        let membership = self.resolver.global(actor).await?;
        authorize(&membership, action)?;
        self.ensure_user(user_id).await?;

        if let Some(name) = name {
            NameRepo::upsert(&self.pool, user_id, name.trim()).await?;
        }
        grant_role(self.permissions.as_ref(), user_id, role).await?;
        info!(actor, user_id, role = role.as_str(), "Role granted");
        Ok(RoleChange {
            user_id,
            role,
            granted: true,
        })
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    async fn display_name(&self, user_id: DbId) -> AppResult<String> {
        Ok(NameRepo::find(&self.pool, user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })?)
    }

    async fn ensure_user(&self, user_id: DbId) -> AppResult<()> {
        if UserRepo::exists(&self.pool, user_id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into())
        }
    }

    async fn ensure_approved(&self, project_id: DbId) -> AppResult<()> {
        match ApprovedProjectRepo::find_creator(&self.pool, project_id).await? {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            }
            .into()),
        }
    }
}

fn manage_action(kind: MemberKind) -> Action {
    match kind {
        MemberKind::Maintainer => Action::ManageMaintainers,
        MemberKind::Contributor => Action::ManageContributors,
    }
}
