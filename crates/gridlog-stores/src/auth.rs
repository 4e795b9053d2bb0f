//! Session and identity store.

use serde::Deserialize;

use gridlog_auth::{Session, SessionView, TokenKind, TokenStore};
use gridlog_client::{ApiClient, ApiError};
use gridlog_core::{Role, User};

/// What a successful login means for the UI's next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    /// The server flagged a forced password reset; route to the reset page.
    PasswordResetRequired,
}

/// Owns the live [`Session`]. Persisted storage is authoritative at boot
/// (a stored token pair resumes the session); this store is authoritative
/// afterwards.
pub struct AuthStore {
    client: ApiClient,
    tokens: TokenStore,
    session: Option<Session>,
}

impl AuthStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        let tokens = client.tokens().clone();
        let session = tokens.load(TokenKind::Access).map(|access| {
            Session::new(
                access,
                tokens.load(TokenKind::Refresh).unwrap_or_default(),
                None,
            )
        });
        Self {
            client,
            tokens,
            session,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().and_then(Session::role)
    }

    #[must_use]
    pub fn is_employee(&self) -> bool {
        self.role() == Some(Role::Employee)
    }

    #[must_use]
    pub fn is_supervisor(&self) -> bool {
        self.role() == Some(Role::Supervisor)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Snapshot for the navigation guard.
    #[must_use]
    pub fn session_view(&self) -> SessionView {
        self.session
            .as_ref()
            .map_or(SessionView::anonymous(), Session::view)
    }

    /// Exchange credentials for a token pair and profile. Both tokens are
    /// persisted so the session survives an app restart.
    ///
    /// # Errors
    ///
    /// Propagates the backend's rejection (bad credentials, throttling).
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        #[derive(Deserialize)]
        struct LoginResponse {
            access: String,
            refresh: String,
            user: User,
        }

        let response: LoginResponse = self
            .client
            .post(
                "/auth/login/",
                &serde_json::json!({ "email": email, "password": password }),
            )
            .await?;

        if let Err(error) = self.tokens.store(TokenKind::Access, &response.access) {
            tracing::warn!(%error, "failed to persist access token");
        }
        if let Err(error) = self.tokens.store(TokenKind::Refresh, &response.refresh) {
            tracing::warn!(%error, "failed to persist refresh token");
        }

        let reset_required = response.user.password_reset_required;
        self.session = Some(Session::new(
            response.access,
            response.refresh,
            Some(response.user),
        ));

        Ok(if reset_required {
            LoginOutcome::PasswordResetRequired
        } else {
            LoginOutcome::Success
        })
    }

    /// Ensure the session has a cached profile, fetching `/auth/me/` when it
    /// does not. Returns whether a profile is available afterwards. A failed
    /// fetch means the token pair is unusable, so the session is torn down.
    pub async fn fetch_user(&mut self) -> bool {
        match &self.session {
            None => return false,
            Some(session) if session.user.is_some() => return true,
            Some(_) => {}
        }

        match self.client.get::<User>("/auth/me/").await {
            Ok(user) => {
                if let Some(session) = self.session.as_mut() {
                    session.user = Some(user);
                }
                true
            }
            Err(error) => {
                tracing::warn!(%error, "profile fetch failed; clearing session");
                self.logout().await;
                false
            }
        }
    }

    /// Complete the forced password reset and clear the local flag.
    ///
    /// # Errors
    ///
    /// Propagates validation errors (mismatched confirmation, weak password).
    pub async fn complete_first_login(
        &mut self,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), ApiError> {
        self.client
            .post_discard(
                "/auth/initial-password-reset/",
                &serde_json::json!({
                    "new_password": new_password,
                    "confirm_password": confirm_password,
                }),
            )
            .await?;

        if let Some(user) = self.session.as_mut().and_then(|s| s.user.as_mut()) {
            user.password_reset_required = false;
        }
        Ok(())
    }

    /// End the session. The backend is notified best-effort so it can
    /// blacklist the refresh token; local state is cleared unconditionally,
    /// whether or not that call succeeds.
    pub async fn logout(&mut self) {
        let refresh = self
            .session
            .as_ref()
            .map(|s| s.refresh_token.clone())
            .filter(|token| !token.is_empty());
        if let Some(refresh) = refresh {
            if let Err(error) = self
                .client
                .post_discard("/auth/logout/", &serde_json::json!({ "refresh": refresh }))
                .await
            {
                tracing::debug!(%error, "logout notification failed; continuing");
            }
        }

        self.session = None;
        if let Err(error) = self.tokens.clear() {
            tracing::warn!(%error, "failed to clear persisted tokens");
        }
    }
}
