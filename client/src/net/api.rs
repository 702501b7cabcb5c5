//! Configured REST client for the remote tour API.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` is built at startup and provided through context. Every
//! resource module (`tours`, `bookings`, ...) goes through it.
//!
//! AUTH
//! ====
//! Requests carry `Authorization: Bearer <access_token>` when the session has
//! one. A 401 triggers exactly one refresh (`POST /auth/refresh`) followed by
//! one replay of the original request. A refresh rejected with 401/403 clears
//! both tokens and fires the session-expired hook (redirect to `/login`).
//! Concurrent 401s each refresh independently.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use super::types::{RefreshRequest, RefreshResponse};
use crate::state::session::SessionStore;

pub const REFRESH_PATH: &str = "/auth/refresh";

/// Failure of a call to the remote API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// 401 that could not be recovered by a refresh.
    #[error("not authorized")]
    Unauthorized,

    /// The refresh token was rejected; the session has been cleared.
    #[error("session expired, please sign in again")]
    SessionExpired,

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request body could not be encoded.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Status { status: 404, message: message.into() }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized | Self::SessionExpired => Some(401),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        Self::Network(e.0)
    }
}

type ExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Bearer-authenticated JSON client. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    session: SessionStore,
    on_session_expired: Option<ExpiredHook>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            transport,
            session,
            on_session_expired: None,
        }
    }

    /// Hook run after a rejected refresh has cleared the tokens.
    #[must_use]
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // =========================================================================
    // VERBS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport, status, or decode failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Vec<(String, String)>) -> Result<T, ApiError> {
        let request = HttpRequest::new(Method::Get, self.url(path)).with_query(query);
        decode(&self.execute(request).await?)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on encode, transport, status, or decode failure.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = HttpRequest::new(Method::Post, self.url(path)).with_body(encode(body)?);
        decode(&self.execute(request).await?)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on encode, transport, status, or decode failure.
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = HttpRequest::new(Method::Patch, self.url(path)).with_body(encode(body)?);
        decode(&self.execute(request).await?)
    }

    /// `DELETE`; the response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport or status failure.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = HttpRequest::new(Method::Delete, self.url(path));
        self.execute(request).await.map(|_| ())
    }

    // =========================================================================
    // EXECUTION
    // =========================================================================

    /// Send `request`, refreshing and replaying once on 401.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.dispatch(request.clone()).await?;
        if response.status != 401 {
            return check_status(response);
        }
        self.refresh_and_replay(request).await
    }

    async fn dispatch(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        request.bearer = self.session.access_token();
        Ok(self.transport.send(request).await?)
    }

    async fn refresh_and_replay(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let Some(refresh_token) = self.session.refresh_token() else {
            leptos::logging::warn!("401 from {} and no refresh token stored", request.url);
            return Err(ApiError::Unauthorized);
        };

        match self.refresh(refresh_token).await {
            Ok(tokens) => {
                self.session.set_tokens(&tokens.access_token, tokens.refresh_token.as_deref());
                let replay = self.dispatch(request).await?;
                if replay.status == 401 {
                    return Err(ApiError::Unauthorized);
                }
                check_status(replay)
            }
            Err(ApiError::Status { status: 401 | 403, .. }) => {
                leptos::logging::warn!("refresh token rejected, ending session");
                self.session.clear_tokens();
                if let Some(hook) = &self.on_session_expired {
                    hook();
                }
                Err(ApiError::SessionExpired)
            }
            Err(e) => {
                leptos::logging::error!("token refresh failed: {e}");
                Err(ApiError::Unauthorized)
            }
        }
    }

    /// Exchange the refresh token. Sent without the bearer header.
    async fn refresh(&self, refresh_token: String) -> Result<RefreshResponse, ApiError> {
        let body = encode(&RefreshRequest { refresh_token })?;
        let request = HttpRequest::new(Method::Post, self.url(REFRESH_PATH)).with_body(body);
        let response = check_status(self.transport.send(request).await?)?;
        decode(&response)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::Status { status: response.status, message: error_message(response.status, &response.body) })
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"message": "..."}`, `{"message": ["...", ...]}` and
/// `{"error": "..."}`; falls back to the status code.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let from_json = parsed.as_ref().and_then(|value| {
        match value.get("message") {
            Some(serde_json::Value::String(msg)) => Some(msg.clone()),
            Some(serde_json::Value::Array(items)) => items.first().and_then(|m| m.as_str()).map(str::to_owned),
            _ => None,
        }
        .or_else(|| value.get("error").and_then(|e| e.as_str()).map(str::to_owned))
    });
    from_json.unwrap_or_else(|| format!("status {status}"))
}
