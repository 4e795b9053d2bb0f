//! Dashboard statistic and activity-feed shapes.
//!
//! Both shapes are produced twice: fetched from a dedicated endpoint, and
//! derived locally from the loaded report list when the endpoint is missing.
//! Using one struct for each guarantees the two paths agree key-for-key, so
//! UI bindings never branch on the source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ReportStatus;

/// Report counts shown on the dashboard. Wire names are camelCase to match
/// the backend's `dashboard-stats` payload.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    /// For employees: own report count. For supervisors: whole-team count.
    #[serde(rename = "myReports")]
    pub my_reports: u64,
    #[serde(rename = "pendingReview")]
    pub pending_review: u64,
    pub reviewed: u64,
    pub draft: u64,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    /// Report id (used for navigation), not the audit log id.
    pub id: i64,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<ReportStatus>,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_actor")]
    pub actor: String,
}

fn default_actor() -> String {
    "System".to_string()
}
