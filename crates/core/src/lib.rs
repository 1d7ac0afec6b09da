//! Domain types, errors, and authorization policy for the project forum.
//!
//! This crate has no internal dependencies so that the persistence layer and
//! the HTTP layer can share the same error taxonomy, role model, and status
//! vocabulary.

pub mod error;
pub mod permissions;
pub mod policy;
pub mod project;
pub mod roles;
pub mod types;
pub mod validation;
