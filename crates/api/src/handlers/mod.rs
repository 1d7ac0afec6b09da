pub mod auth;
pub mod deleted;
pub mod members;
pub mod project;
pub mod roles;
pub mod submission;
