use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ReportStatus;

/// A weekly activity report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub status: ReportStatus,
    pub week_number: u32,
    pub year: i32,
    /// Id of the owning employee.
    pub user: i64,
    /// Display name of the owning employee, when the serializer includes it.
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub accomplishments: String,
    #[serde(default)]
    pub goals_next_week: String,
    #[serde(default)]
    pub blockers: String,
    #[serde(default)]
    pub support_needed: String,
    /// Supervisor feedback attached when a revision is requested.
    #[serde(default)]
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// A comment on a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub report: i64,
    #[serde(default)]
    pub author_name: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
