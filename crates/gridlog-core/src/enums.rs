//! Role, report status, and notification kind enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `ReportStatus` carries a state machine and provides `allowed_next_states()`
//! so stores can reject invalid workflow transitions before hitting the backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of an authenticated user. Gates route and feature access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Supervisor,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Supervisor => "supervisor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Self::Employee),
            "supervisor" => Ok(Self::Supervisor),
            "admin" => Ok(Self::Admin),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ReportStatus
// ---------------------------------------------------------------------------

/// Status of a weekly report through its review lifecycle.
///
/// ```text
/// not_started → draft → submitted → reviewed
///                               → revision_requested → submitted
///                               → draft (reset)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    NotStarted,
    Draft,
    RevisionRequested,
    Submitted,
    Reviewed,
}

impl ReportStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::NotStarted => &[Self::Draft, Self::Submitted],
            Self::Draft | Self::RevisionRequested => &[Self::Submitted],
            Self::Submitted => &[Self::Reviewed, Self::RevisionRequested, Self::Draft],
            Self::Reviewed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether the report can still be edited by its owner.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Draft | Self::RevisionRequested)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Draft => "draft",
            Self::RevisionRequested => "revision_requested",
            Self::Submitted => "submitted",
            Self::Reviewed => "reviewed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(Self::NotStarted),
            "draft" => Ok(Self::Draft),
            "revision_requested" => Ok(Self::RevisionRequested),
            "submitted" => Ok(Self::Submitted),
            "reviewed" => Ok(Self::Reviewed),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Kind of an in-app notification. Unknown kinds from newer backends
/// deserialize as `Other` instead of failing the whole fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ReportSubmitted,
    ReportReviewed,
    RevisionRequested,
    NewComment,
    DeadlineReminder,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReportSubmitted => "report_submitted",
            Self::ReportReviewed => "report_reviewed",
            Self::RevisionRequested => "revision_requested",
            Self::NewComment => "new_comment",
            Self::DeadlineReminder => "deadline_reminder",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Employee, Role::Supervisor, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn role_unknown_is_an_error() {
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn submit_allowed_from_draft_and_not_started() {
        assert!(ReportStatus::Draft.can_transition_to(ReportStatus::Submitted));
        assert!(ReportStatus::NotStarted.can_transition_to(ReportStatus::Submitted));
        assert!(ReportStatus::RevisionRequested.can_transition_to(ReportStatus::Submitted));
    }

    #[test]
    fn reviewed_is_terminal() {
        assert!(ReportStatus::Reviewed.allowed_next_states().is_empty());
    }

    #[test]
    fn review_only_from_submitted() {
        assert!(ReportStatus::Submitted.can_transition_to(ReportStatus::Reviewed));
        assert!(!ReportStatus::Draft.can_transition_to(ReportStatus::Reviewed));
    }

    #[test]
    fn editable_states() {
        assert!(ReportStatus::Draft.is_editable());
        assert!(ReportStatus::RevisionRequested.is_editable());
        assert!(!ReportStatus::Submitted.is_editable());
        assert!(!ReportStatus::Reviewed.is_editable());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ReportStatus::RevisionRequested).unwrap();
        assert_eq!(json, r#""revision_requested""#);
    }

    #[test]
    fn unknown_notification_kind_degrades_to_other() {
        let kind: NotificationKind = serde_json::from_str(r#""something_new""#).unwrap();
        assert_eq!(kind, NotificationKind::Other);
    }
}
