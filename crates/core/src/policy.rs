//! Authorization policy: which relationships may perform which action.
//!
//! Pure functions only. Roles compose by union: holding any one of the
//! allowed roles is sufficient, and there is no deny override.

use crate::error::CoreError;
use crate::roles::{Membership, ProjectRole};

/// Mutating operation classes subject to authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Submit a project for moderation (or publish it, for privileged actors).
    SubmitProject,
    /// Publish a project directly, skipping the buffer.
    CreateProjectDirect,
    /// Approve or reject a pending submission.
    ModerateSubmission,
    UpdateProjectStatus,
    DeleteProject,
    /// Add or remove a maintainer.
    ManageMaintainers,
    /// Add or remove a contributor.
    ManageContributors,
    /// Grant or revoke the admin role.
    ManageAdmins,
    GrantSuperadmin,
}

const PRIVILEGED: &[ProjectRole] = &[ProjectRole::Superadmin, ProjectRole::Admin];
const OWNERS: &[ProjectRole] = &[
    ProjectRole::Superadmin,
    ProjectRole::Admin,
    ProjectRole::Creator,
];
const STAFF: &[ProjectRole] = &[
    ProjectRole::Superadmin,
    ProjectRole::Admin,
    ProjectRole::Creator,
    ProjectRole::Maintainer,
];
const SUPERADMIN_ONLY: &[ProjectRole] = &[ProjectRole::Superadmin];

impl Action {
    /// Roles that satisfy this action. `SubmitProject` is open to any
    /// authenticated actor and therefore lists nothing.
    pub fn allowed_roles(self) -> &'static [ProjectRole] {
        match self {
            Action::SubmitProject => &[],
            Action::CreateProjectDirect => PRIVILEGED,
            Action::ModerateSubmission => PRIVILEGED,
            Action::UpdateProjectStatus => STAFF,
            Action::DeleteProject => OWNERS,
            Action::ManageMaintainers => OWNERS,
            Action::ManageContributors => STAFF,
            Action::ManageAdmins => SUPERADMIN_ONLY,
            Action::GrantSuperadmin => SUPERADMIN_ONLY,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Action::SubmitProject => "submit a project",
            Action::CreateProjectDirect => "publish a project directly",
            Action::ModerateSubmission => "moderate submissions",
            Action::UpdateProjectStatus => "update this project's status",
            Action::DeleteProject => "delete this project",
            Action::ManageMaintainers => "manage this project's maintainers",
            Action::ManageContributors => "manage this project's contributors",
            Action::ManageAdmins => "manage admin roles",
            Action::GrantSuperadmin => "grant the superadmin role",
        }
    }
}

/// Returns `true` if `membership` satisfies `action`.
pub fn is_allowed(membership: &Membership, action: Action) -> bool {
    match action {
        Action::SubmitProject => true,
        other => other
            .allowed_roles()
            .iter()
            .any(|role| membership.has(*role)),
    }
}

/// Like [`is_allowed`], but yields a `PermissionDenied` error naming the action.
pub fn authorize(membership: &Membership, action: Action) -> Result<(), CoreError> {
    if is_allowed(membership, action) {
        Ok(())
    } else {
        Err(CoreError::PermissionDenied(format!(
            "Not allowed to {}",
            action.describe()
        )))
    }
}

/// Privileged submitters bypass the buffer and publish straight away.
pub fn publishes_directly(membership: &Membership) -> bool {
    is_allowed(membership, Action::CreateProjectDirect)
}
