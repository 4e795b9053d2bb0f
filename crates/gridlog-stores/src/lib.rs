//! # gridlog-stores
//!
//! Client-side state stores for the Gridlog app: session/identity, report
//! CRUD and workflow transitions with derived dashboard statistics,
//! admin-facing lists, and polled notifications.
//!
//! Control flow is always: UI action -> store method -> [`gridlog_client::ApiClient`]
//! -> backend -> store mutates its in-memory state -> UI re-reads. Store
//! methods record a human-readable message on their `error` field and
//! re-throw, so calling UI can react while a global handler shows the toast.

pub mod admin;
pub mod auth;
pub mod notifications;
pub mod reports;

pub use admin::{AdminStore, NewPeriod};
pub use auth::{AuthStore, LoginOutcome};
pub use notifications::{
    visibility_channel, NotificationPoller, NotificationsState, NotificationsStore, Visibility,
};
pub use reports::{ExportFormat, NewReport, ReportView, ReportsStore};
