//! Global role tiers and per-project relationships.
//!
//! The permission store speaks in `(subject, namespace, role)` string triples.
//! Those strings live here and nowhere else; the rest of the system works with
//! [`Role`] and [`Membership`].

use serde::{Deserialize, Serialize};

/// Namespace holding superadmin grants.
pub const NS_SUPERADMINS: &str = "superadmins";
/// Namespace holding admin grants.
pub const NS_ADMINS: &str = "admins";
/// Generic per-user membership namespace, granted on registration.
pub const NS_USERS: &str = "users";
/// Role name used inside every namespace above.
pub const ROLE_MEMBER: &str = "member";

/// Global tier of an actor. Ordered: `User < Admin < Superadmin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superadmin,
}

impl Role {
    /// The `(namespace, role)` pair whose presence grants this tier.
    pub fn grant(self) -> (&'static str, &'static str) {
        match self {
            Role::User => (NS_USERS, ROLE_MEMBER),
            Role::Admin => (NS_ADMINS, ROLE_MEMBER),
            Role::Superadmin => (NS_SUPERADMINS, ROLE_MEMBER),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }
}

/// A single relationship an actor can hold, globally or towards one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Superadmin,
    Admin,
    Creator,
    Maintainer,
    Contributor,
}

/// Everything the membership resolver learned about an actor.
///
/// The global flags come straight from the permission store; the project
/// flags are only meaningful when a project was part of the lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Membership {
    pub superadmin: bool,
    pub admin: bool,
    pub creator: bool,
    pub maintainer: bool,
    pub contributor: bool,
}

impl Membership {
    /// Membership with only the global flags set.
    pub fn global(superadmin: bool, admin: bool) -> Self {
        Self {
            superadmin,
            admin,
            ..Self::default()
        }
    }

    /// Does the actor hold `role`?
    pub fn has(&self, role: ProjectRole) -> bool {
        match role {
            ProjectRole::Superadmin => self.superadmin,
            ProjectRole::Admin => self.admin,
            ProjectRole::Creator => self.creator,
            ProjectRole::Maintainer => self.maintainer,
            ProjectRole::Contributor => self.contributor,
        }
    }

    /// Highest global tier held.
    pub fn tier(&self) -> Role {
        if self.superadmin {
            Role::Superadmin
        } else if self.admin {
            Role::Admin
        } else {
            Role::User
        }
    }
}
