//! # gridlog-core
//!
//! Core types for the Gridlog client SDK.
//!
//! This crate provides the foundational types shared across all Gridlog crates:
//! - Entity structs for the domain objects the backend serves (users, reports,
//!   reporting periods, notifications, audit entries)
//! - Role and status enums with state machine transitions
//! - The paginated list envelope used by list endpoints
//! - Dashboard statistic and activity-feed shapes
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod page;
pub mod stats;

pub use entities::{AuditEntry, Comment, EmployeeRef, Notification, Report, ReportingPeriod, User};
pub use enums::{NotificationKind, ReportStatus, Role};
pub use errors::CoreError;
pub use page::{ListPayload, Page, PageInfo};
pub use stats::{ActivityEntry, DashboardStats};
