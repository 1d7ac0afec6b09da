//! Project lifecycle vocabulary (statuses and listing filters).
//!
//! Statuses are stored as TEXT columns; these enums are the only place the
//! accepted spellings are defined.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status of a published (approved) project. Transitions freely among all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
    Upcoming,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::Upcoming,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::InvalidRequest(format!(
                    "Invalid status '{s}'. Must be one of: in_progress, completed, upcoming"
                ))
            })
    }
}

/// Status of a row in the submission buffer. `Rejected` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public listing filter over approved projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingFilter {
    Ongoing,
    Completed,
    Upcoming,
    #[default]
    All,
}

impl ListingFilter {
    /// The status a listing is restricted to, or `None` for every status.
    pub fn status(self) -> Option<ProjectStatus> {
        match self {
            ListingFilter::Ongoing => Some(ProjectStatus::InProgress),
            ListingFilter::Completed => Some(ProjectStatus::Completed),
            ListingFilter::Upcoming => Some(ProjectStatus::Upcoming),
            ListingFilter::All => None,
        }
    }
}

impl FromStr for ListingFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" | "in_progress" => Ok(ListingFilter::Ongoing),
            "completed" | "past" => Ok(ListingFilter::Completed),
            "upcoming" => Ok(ListingFilter::Upcoming),
            "all" => Ok(ListingFilter::All),
            other => Err(CoreError::InvalidRequest(format!(
                "Unknown listing filter '{other}'"
            ))),
        }
    }
}
