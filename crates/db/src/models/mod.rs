//! Domain model structs and DTOs.
//!
//! Listing structs expose `has_thumbnail` instead of the image bytes; the
//! bytes are only read when serving a thumbnail or moving a row between
//! collections.

pub mod deleted_project;
pub mod member;
pub mod project;
pub mod submission;
pub mod user;
