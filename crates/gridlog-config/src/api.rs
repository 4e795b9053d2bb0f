//! Backend API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default versioned path prefix, matching the backend's URL layout.
fn default_prefix() -> String {
    "/api/v1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Origin of the backend, e.g. `https://gridlog.example.com`. Required.
    #[serde(default)]
    pub base_url: String,

    /// Versioned path prefix appended to the base URL.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            prefix: default_prefix(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Root all endpoint paths are joined onto: `{base_url}{prefix}` with
    /// trailing/leading slash overlap collapsed.
    #[must_use]
    pub fn endpoint_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return base.to_string();
        }
        if prefix.starts_with('/') {
            format!("{base}{prefix}")
        } else {
            format!("{base}/{prefix}")
        }
    }
}
