//! Paginated list envelope.
//!
//! List endpoints return either a bare JSON array or a DRF-style envelope
//! `{results, count, next, previous}` depending on whether pagination is
//! enabled for the view. `ListPayload` accepts both so every list fetch goes
//! through one code path.

use serde::{Deserialize, Serialize};

/// DRF-style paginated envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// A list response body: bare array or paginated envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paginated(Page<T>),
    Items(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Split into the item list and pagination facts (if any).
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<PageInfo>) {
        match self {
            Self::Paginated(page) => {
                let info = PageInfo {
                    count: page.count,
                    next: page.next,
                    previous: page.previous,
                };
                (page.results, Some(info))
            }
            Self::Items(items) => (items, None),
        }
    }
}

/// Pagination cursor facts kept by list-owning stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_paginated_envelope() {
        let payload: ListPayload<i64> = serde_json::from_str(
            r#"{"results": [1, 2], "count": 10, "next": "/reports/?page=2", "previous": null}"#,
        )
        .unwrap();
        let (items, info) = payload.into_parts();
        assert_eq!(items, vec![1, 2]);
        let info = info.unwrap();
        assert_eq!(info.count, 10);
        assert_eq!(info.next.as_deref(), Some("/reports/?page=2"));
        assert_eq!(info.previous, None);
    }

    #[test]
    fn accepts_bare_array() {
        let payload: ListPayload<i64> = serde_json::from_str("[3, 4, 5]").unwrap();
        let (items, info) = payload.into_parts();
        assert_eq!(items, vec![3, 4, 5]);
        assert!(info.is_none());
    }
}
