//! Maintainer / contributor relation model.

use forum_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Which relation table a membership row lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Maintainer,
    Contributor,
}

impl MemberKind {
    pub fn table(self) -> &'static str {
        match self {
            MemberKind::Maintainer => "maintainers",
            MemberKind::Contributor => "contributors",
        }
    }

    pub fn id_column(self) -> &'static str {
        match self {
            MemberKind::Maintainer => "m_id",
            MemberKind::Contributor => "c_id",
        }
    }

    /// Entity label used in not-found errors.
    pub fn entity(self) -> &'static str {
        match self {
            MemberKind::Maintainer => "Maintainer",
            MemberKind::Contributor => "Contributor",
        }
    }
}

/// A row from `maintainers` or `contributors`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMember {
    pub id: DbId,
    pub p_id: DbId,
    pub user_id: DbId,
    /// Display name snapshot taken when the row was written.
    pub name: String,
}
