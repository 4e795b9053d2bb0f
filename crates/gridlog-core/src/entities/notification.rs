use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::NotificationKind;

/// An in-app notification. Delivered by polling `/notifications/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
