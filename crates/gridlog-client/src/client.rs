//! The shared HTTP client.
//!
//! One `ApiClient` is constructed at startup and cloned into every store.
//! It joins paths onto the configured endpoint root, attaches the bearer
//! token, holds a loading permit for the duration of each request, and on a
//! 401 runs one coordinated token refresh before replaying the request.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{broadcast, watch};

use gridlog_auth::{TokenKind, TokenStore};
use gridlog_config::ApiConfig;

use crate::error::{derive_message, ApiError};
use crate::events::SessionEvent;
use crate::gauge::LoadingGauge;
use crate::refresh::{RefreshFailed, RefreshGate, RefreshTicket};

const EVENT_CHANNEL_CAPACITY: usize = 16;

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    root: String,
    tokens: TokenStore,
    gauge: LoadingGauge,
    gate: RefreshGate,
    events: broadcast::Sender<SessionEvent>,
}

impl ApiClient {
    #[must_use]
    pub fn new(api: &ApiConfig, tokens: TokenStore) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                http: reqwest::Client::new(),
                root: api.endpoint_root(),
                tokens,
                gauge: LoadingGauge::new(),
                gate: RefreshGate::new(),
                events,
            }),
        }
    }

    /// The token store this client reads bearer tokens from.
    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.inner.tokens
    }

    /// Watch the number of in-flight requests (global loading indicator).
    #[must_use]
    pub fn loading(&self) -> watch::Receiver<usize> {
        self.inner.gauge.subscribe()
    }

    /// Requests currently in flight.
    #[must_use]
    pub fn active_requests(&self) -> usize {
        self.inner.gauge.active()
    }

    /// Subscribe to session lifecycle events (e.g. forced logout).
    #[must_use]
    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    // --- Typed request helpers ---

    /// GET a JSON resource.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None).await
    }

    /// GET with URL-encoded query parameters appended.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, &with_query(path, query), None)
            .await
    }

    /// POST a JSON body, decode a JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(to_value(body)?))
            .await
    }

    /// POST without a body, decode a JSON response (workflow transitions).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::POST, path, None).await
    }

    /// POST a JSON body and ignore the response payload (fire-and-acknowledge
    /// endpoints like logout and mark-read).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_discard<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute(Method::POST, path, Some(to_value(body)?))
            .await
            .map(|_| ())
    }

    /// PUT a JSON body, decode a JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(to_value(body)?)).await
    }

    /// DELETE a resource; the response body is ignored.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None).await.map(|_| ())
    }

    /// GET raw bytes (backend-generated CSV/PDF exports).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, ApiError> {
        self.execute(Method::GET, &with_query(path, query), None)
            .await
    }

    // --- Core request path ---

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let bytes = self.execute(method, path, body).await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send one logical request: bearer attach, loading permit, and at most
    /// one refresh-and-replay on 401.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ApiError> {
        let _permit = self.inner.gauge.acquire();

        let token = self.inner.tokens.load(TokenKind::Access);
        let response = self
            .send_once(method.clone(), path, body.as_ref(), token.as_deref())
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return finish(response).await;
        }

        tracing::debug!(path, "401 response, entering refresh cycle");
        let access = self.refreshed_access().await?;
        let response = self
            .send_once(method, path, body.as_ref(), Some(&access))
            .await?;
        finish(response).await
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.inner.root, path);
        tracing::debug!(%method, %url, "api request");
        let mut request = self.inner.http.request(method, &url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Obtain a fresh access token, serialized through the refresh gate.
    async fn refreshed_access(&self) -> Result<String, ApiError> {
        match self.inner.gate.join() {
            RefreshTicket::Follower(outcome) => outcome
                .await
                .map_err(|_| ApiError::SessionExpired)?
                .map_err(|RefreshFailed| ApiError::SessionExpired),
            RefreshTicket::Leader => match self.run_refresh().await {
                Ok(access) => {
                    self.inner.gate.settle(&Ok(access.clone()));
                    Ok(access)
                }
                Err(err) => {
                    self.inner.gate.settle(&Err(RefreshFailed));
                    self.teardown_session();
                    Err(err)
                }
            },
        }
    }

    /// The refresh call itself. Bypasses bearer attach and 401 interception.
    async fn run_refresh(&self) -> Result<String, ApiError> {
        let Some(refresh) = self.inner.tokens.load(TokenKind::Refresh) else {
            tracing::warn!("401 with no refresh token stored");
            return Err(ApiError::SessionExpired);
        };

        let url = format!("{}/auth/token/refresh/", self.inner.root);
        let response = self
            .inner
            .http
            .post(&url)
            .json(&serde_json::json!({ "refresh": refresh }))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "token refresh rejected");
            return Err(ApiError::SessionExpired);
        }

        #[derive(serde::Deserialize)]
        struct RefreshResponse {
            access: String,
        }
        let body: RefreshResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if let Err(error) = self.inner.tokens.store(TokenKind::Access, &body.access) {
            // Replays in this cycle use the in-flight value directly, so a
            // persist failure degrades the next boot, not this session.
            tracing::warn!(%error, "failed to persist refreshed access token");
        }
        Ok(body.access)
    }

    fn teardown_session(&self) {
        if let Err(error) = self.inner.tokens.clear() {
            tracing::warn!(%error, "failed to clear persisted tokens");
        }
        let _ = self.inner.events.send(SessionEvent::Expired);
    }
}

async fn finish(response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if status.is_success() {
        return Ok(bytes.to_vec());
    }
    let message = derive_message(&bytes).unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %message, "api error response");
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

fn to_value<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn with_query(path: &str, query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let pairs: Vec<String> = query
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{}", pairs.join("&"))
}
