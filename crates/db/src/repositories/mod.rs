//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Methods
//! that take part in multi-statement moves accept any [`sqlx::PgExecutor`]
//! so they run equally against the pool or inside a transaction.

pub mod approved_project_repo;
pub mod deleted_project_repo;
pub mod member_repo;
pub mod name_repo;
pub mod permission_repo;
pub mod submission_repo;
pub mod user_repo;

pub use approved_project_repo::ApprovedProjectRepo;
pub use deleted_project_repo::DeletedProjectRepo;
pub use member_repo::MemberRepo;
pub use name_repo::NameRepo;
pub use permission_repo::PermissionRepo;
pub use submission_repo::SubmissionRepo;
pub use user_repo::UserRepo;
