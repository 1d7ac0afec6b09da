//! Authorization-gated project lifecycle.
//!
//! [`MembershipResolver`] works out who the caller is relative to a project,
//! [`forum_core::policy`] decides, and [`LifecycleEngine`] performs the
//! store mutation once the decision allows it.

pub mod lifecycle;
pub mod membership;

pub use lifecycle::{LifecycleEngine, NewProject, RoleChange, SubmitOutcome};
pub use membership::MembershipResolver;
