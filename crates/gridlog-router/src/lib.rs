//! # gridlog-router
//!
//! The client-side route table and the navigation guard that enforces
//! authentication, the forced-password-reset flow, and role-based access.
//!
//! The guard is a pure function: it owns no state and reads only the
//! [`gridlog_auth::SessionView`] snapshot and the target path, so every
//! navigation decision is trivially testable.

pub mod guard;
pub mod routes;

pub use guard::{check, GuardDecision, DASHBOARD, FIRST_LOGIN, LOGIN};
pub use routes::{resolve, routes, Route, RouteMeta};
