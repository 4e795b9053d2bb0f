//! Entity structs mirroring the backend's serialized domain objects.

mod audit;
mod notification;
mod period;
mod report;
mod user;

pub use audit::AuditEntry;
pub use notification::Notification;
pub use period::ReportingPeriod;
pub use report::{Comment, Report};
pub use user::{EmployeeRef, User};
