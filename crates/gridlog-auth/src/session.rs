//! In-memory session record.
//!
//! Created on login, access token swapped on refresh, destroyed on logout or
//! an irrecoverable refresh failure. The persisted copy in
//! [`crate::token_store::TokenStore`] is authoritative at boot; this record
//! is authoritative afterwards.

use gridlog_core::{Role, User};
use serde::{Deserialize, Serialize};

/// The live session: token pair plus an optionally cached profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Fetched lazily from `/auth/me/` when not included in the login payload.
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn new(access_token: String, refresh_token: String, user: Option<User>) -> Self {
        Self {
            access_token,
            refresh_token,
            user,
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn password_reset_required(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.password_reset_required)
    }

    /// Borrowed facts the navigation guard consumes.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            authenticated: !self.access_token.is_empty(),
            role: self.role(),
            password_reset_required: self.password_reset_required(),
        }
    }
}

/// What the router guard needs to know about the current session.
///
/// A missing session is represented by [`SessionView::anonymous`], so the
/// guard is a total function over every navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub authenticated: bool,
    pub role: Option<Role>,
    pub password_reset_required: bool,
}

impl SessionView {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: None,
            password_reset_required: false,
        }
    }
}
