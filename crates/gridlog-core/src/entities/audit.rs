use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit log row from `/auth/audit-logs/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: i64,
    #[serde(default)]
    pub actor: Option<String>,
    pub action: String,
    #[serde(default)]
    pub target: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub message: Option<String>,
}
