//! Thin HTTP transport for the Shoehorn API.
//!
//! A single request primitive with bearer-token injection, plus typed
//! wrappers that map HTTP failures into the CLI error taxonomy. Requests
//! are never retried here; callers see every failure.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("shoehorn-cli/", env!("CARGO_PKG_VERSION"));

/// Error emitted by the Shoehorn API transport.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("not authenticated - run: shoehorn auth login")]
    NotAuthenticated,
}

/// Broad error categories used to pick exit codes and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Auth,
    NotFound,
    Validation,
    Server,
    Decode,
    Other,
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Network(_) => ErrorCategory::Network,
            ApiError::Api { status, .. } => match *status {
                401 | 403 => ErrorCategory::Auth,
                404 => ErrorCategory::NotFound,
                400 | 422 => ErrorCategory::Validation,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Other,
            },
            ApiError::Decode(_) => ErrorCategory::Decode,
            ApiError::NotAuthenticated => ErrorCategory::Auth,
        }
    }
}

/// Structured error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    #[allow(dead_code)]
    code: Option<String>,
}

/// Extract a human-readable message from a non-2xx response body, falling
/// back to the raw text when there is no structured envelope.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            token: None,
        })
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an authenticated client from the current profile of the given
    /// configuration. Fails fast when no token is present.
    pub fn from_config(config: &crate::config::Config) -> Result<Self, ApiError> {
        if !config.is_authenticated() {
            return Err(ApiError::NotAuthenticated);
        }
        let profile = config
            .current_profile()
            .map_err(|_| ApiError::NotAuthenticated)?;
        let token = profile
            .auth
            .as_ref()
            .map(|auth| auth.access_token.clone())
            .unwrap_or_default();
        Ok(ApiClient::new(&profile.server)?.with_token(&token))
    }

    /// The single request primitive: send one request and return the raw
    /// status and body. Network-level failures surface as `Network`;
    /// status handling is up to the caller.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<(StatusCode, String), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        trace!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        trace!("response {} ({} bytes)", status, text.len());
        Ok((status, text))
    }

    /// Typed request: serialize the body, execute, map non-2xx statuses to
    /// `ApiError::Api`, and deserialize a successful body into `T`.
    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let payload = match body {
            Some(body) => Some(serde_json::to_value(body)?),
            None => None,
        };
        let (status, text) = self.execute(method, path, payload.as_ref()).await?;

        if !status.is_success() {
            let message = error_message(&text);
            debug!("API error {} on {}: {}", status, path, message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// POST that decodes the body regardless of a 4xx status, returning the
    /// status alongside the decoded value. The manifest-validate endpoint
    /// answers 422 with a meaningful validation result, so a non-2xx status
    /// is not a transport failure there; only 5xx and 401/403 are.
    pub async fn post_raw_status<T, B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, T), ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let payload = serde_json::to_value(body)?;
        let (status, text) = self.execute(Method::POST, path, Some(&payload)).await?;

        if status.as_u16() >= 500 || status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        Ok((status, serde_json::from_str(&text)?))
    }
}

/// Build a query string with deterministic key order, skipping empty values.
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        serializer.append_pair(key, value);
        any = true;
    }
    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}

/// Normalize a server URL: assume https when no scheme is given and strip
/// trailing slashes.
pub fn normalize_server_url(raw: &str) -> String {
    let mut url = raw.trim().to_string();
    if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
        url = format!("https://{}", url);
    }
    url.trim_end_matches('/').to_string()
}
