use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reporting period an admin opens for a given week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub id: i64,
    pub week_number: u32,
    pub year: i32,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    #[serde(default)]
    pub is_closed: bool,
}
