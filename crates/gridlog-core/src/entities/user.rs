use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// The authenticated user's profile, as returned by `/auth/me/` and embedded
/// in the login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    /// Server-flagged forced password reset: the user must set a new password
    /// before using the rest of the app.
    #[serde(default)]
    pub password_reset_required: bool,
}

/// Minimal employee reference used by filter dropdowns.
///
/// `/auth/employees/` returns full user records; only these two fields are
/// kept so the local fallback (derived from loaded reports) can produce the
/// same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeRef {
    pub id: i64,
    pub full_name: String,
}
