//! API client for the Bridge authentication endpoints.
//!
//! `ApiClient` performs the actual HTTP calls; the controller depends on
//! the `AuthApi` trait so tests can substitute a double. Sign-in responses
//! are classified into a `SignInOutcome` here, so callers never branch on
//! raw status codes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::SessionInfo;

use super::ApiError;

/// Path of the sign-in endpoint, relative to the server base URL
const SIGN_IN_PATH: &str = "/api/auth/signIn";

/// Path of the sign-out endpoint, relative to the server base URL
const SIGN_OUT_PATH: &str = "/api/auth/signOut";

/// Header carrying the session token on authenticated requests
const SESSION_HEADER: &str = "Bridge-Session";

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Outcome of a sign-in attempt, as classified by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The server accepted the credentials and returned a session.
    Success(SessionInfo),
    /// The server rejected the credentials (HTTP 404). The message, when
    /// the body carries one, is suitable for display to the user.
    InvalidCredentials(Option<String>),
    /// The user has not accepted the current terms of service (HTTP 412).
    /// Carries the session token needed to reach the consent flow.
    ConsentRequired(String),
    /// Any other rejection, including a malformed body.
    Failed,
}

/// Transport seam the sign-in/sign-out orchestration depends on.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Submit credentials and classify the server's answer
    async fn sign_in(&self, username: &str, password: &str) -> Result<SignInOutcome, ApiError>;

    /// End the current server-side session
    async fn sign_out(&self) -> Result<(), ApiError>;

    /// Install or drop the token attached to authenticated requests
    fn set_session_token(&mut self, token: Option<String>);
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Envelope the production server wraps session payloads in
#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    payload: SessionInfo,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    payload: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConsentBody {
    #[serde(rename = "sessionToken")]
    session_token: Option<String>,
}

/// API client for the Bridge server.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client for the given server
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn session_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            match header::HeaderValue::from_str(token) {
                Ok(value) => {
                    headers.insert(SESSION_HEADER, value);
                }
                Err(_) => warn!("Session token is not a valid header value"),
            }
        }
        headers
    }
}

/// Parse a session object out of a 2xx sign-in body.
/// The documented contract is the flat object; the production server wraps
/// it in a `{type, payload}` envelope, so try the flat shape first and fall
/// back to the envelope.
fn parse_session(body: &str) -> Option<SessionInfo> {
    if let Ok(info) = serde_json::from_str::<SessionInfo>(body) {
        return Some(info);
    }
    serde_json::from_str::<SessionEnvelope>(body)
        .ok()
        .map(|envelope| envelope.payload)
}

fn classify_sign_in(status: StatusCode, body: &str) -> Result<SignInOutcome, ApiError> {
    if status.is_success() {
        return match parse_session(body) {
            Some(info) => Ok(SignInOutcome::Success(info)),
            None => Err(ApiError::InvalidResponse(ApiError::truncate_body(body))),
        };
    }
    match status.as_u16() {
        404 => {
            let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
            Ok(SignInOutcome::InvalidCredentials(parsed.payload))
        }
        412 => {
            let parsed: ConsentBody = serde_json::from_str(body).unwrap_or_default();
            match parsed.session_token {
                Some(token) if !token.is_empty() => Ok(SignInOutcome::ConsentRequired(token)),
                _ => {
                    warn!("Consent response carried no session token");
                    Ok(SignInOutcome::Failed)
                }
            }
        }
        _ => {
            debug!(status = %status, "Sign in rejected");
            Ok(SignInOutcome::Failed)
        }
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn sign_in(&self, username: &str, password: &str) -> Result<SignInOutcome, ApiError> {
        let url = self.endpoint(SIGN_IN_PATH);
        let request = SignInRequest { username, password };

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!(status = %status, "Sign in response received");

        classify_sign_in(status, &body)
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        let url = self.endpoint(SIGN_OUT_PATH);

        let response = self
            .client
            .get(&url)
            .headers(self.session_headers())
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "Sign out response received");

        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    fn set_session_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
