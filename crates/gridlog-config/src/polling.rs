//! Notification polling configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const fn default_notifications_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PollingConfig {
    /// Seconds between notification fetches while the app is visible.
    #[serde(default = "default_notifications_secs")]
    pub notifications_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            notifications_secs: default_notifications_secs(),
        }
    }
}

impl PollingConfig {
    #[must_use]
    pub const fn notifications_interval(&self) -> Duration {
        Duration::from_secs(self.notifications_secs)
    }
}
