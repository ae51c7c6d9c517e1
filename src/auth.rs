//! Credential acquisition: OAuth2 device-authorization flow and Personal
//! Access Token verification.
//!
//! Both paths end the same way: a successful login writes an [`Auth`] block
//! onto the selected profile and persists the configuration exactly once.
//! Nothing is written on any failure path.

use crate::catalog::Me;
use crate::client::{ApiClient, ApiError};
use crate::config::{Auth, Config, ConfigError, ConfigStore, Profile, ProviderType, UserInfo};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tokio::time::sleep;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("device authorization timed out; run 'shoehorn auth login' again")]
    Timeout,
    #[error("login cancelled")]
    Cancelled,
    #[error("device authorization failed: {0}")]
    Failed(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One device-authorization handshake as returned by the init endpoint.
/// Lives only for the duration of a single login invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceAuthorization {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri: String,
    #[serde(default)]
    pub verification_uri_complete: Option<String>,
    pub expires_in: u64,
    pub interval: u64,
}

/// One poll response. The server signals progress through `status`
/// ("pending" or "slow_down") until a token is issued.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevicePollResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Serialize)]
struct DevicePollRequest<'a> {
    device_code: &'a str,
}

/// The two device-flow endpoints, as a seam so the polling state machine
/// can be driven by a scripted fake in tests.
pub trait DeviceAuthApi {
    fn device_init(&self) -> impl Future<Output = Result<DeviceAuthorization, ApiError>> + Send;
    fn device_poll(
        &self,
        device_code: &str,
    ) -> impl Future<Output = Result<DevicePollResponse, ApiError>> + Send;
}

impl DeviceAuthApi for ApiClient {
    async fn device_init(&self) -> Result<DeviceAuthorization, ApiError> {
        self.post("/api/v1/auth/cli/device-init", &serde_json::json!({}))
            .await
    }

    async fn device_poll(&self, device_code: &str) -> Result<DevicePollResponse, ApiError> {
        self.post("/api/v1/auth/cli/device-poll", &DevicePollRequest { device_code })
            .await
    }
}

const POLL_STATUS_PENDING: &str = "pending";
const POLL_STATUS_SLOW_DOWN: &str = "slow_down";

/// Drives the device-authorization handshake against a server and a
/// credential store: initiate, let the caller display the code, then poll
/// with backoff until authenticated, expired, or cancelled.
pub struct DeviceFlow<A> {
    api: A,
    store: ConfigStore,
    server: String,
    profile: String,
}

impl<A: DeviceAuthApi> DeviceFlow<A> {
    pub fn new(api: A, store: ConfigStore, server: &str, profile: &str) -> Self {
        DeviceFlow {
            api,
            store,
            server: server.to_string(),
            profile: profile.to_string(),
        }
    }

    pub async fn initiate(&self) -> Result<DeviceAuthorization, AuthError> {
        Ok(self.api.device_init().await?)
    }

    /// Poll until the server issues a token or the authorization expires.
    ///
    /// Backoff starts at the server-declared interval and doubles on each
    /// `slow_down`. The overall deadline comes from `expires_in`. The
    /// `cancel` future aborts the loop without touching the configuration.
    pub async fn poll_until_authenticated(
        &self,
        session: &DeviceAuthorization,
        cancel: impl Future<Output = ()>,
    ) -> Result<Config, AuthError> {
        tokio::pin!(cancel);
        let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(session.expires_in);
        let mut interval = session.interval.max(1);

        loop {
            let poll = async {
                let response = self.api.device_poll(&session.device_code).await?;

                if let Some(token) = &response.access_token {
                    if !token.is_empty() {
                        return Ok(Some(response));
                    }
                }

                match response.status.as_deref() {
                    Some(POLL_STATUS_PENDING) => Ok(None),
                    Some(POLL_STATUS_SLOW_DOWN) => {
                        interval *= 2;
                        debug!("server asked to slow down; interval now {}s", interval);
                        Ok(None)
                    }
                    other => Err(AuthError::Failed(format!(
                        "unexpected poll response (status: {})",
                        other.unwrap_or("none")
                    ))),
                }
            };

            let outcome = tokio::select! {
                _ = &mut cancel => return Err(AuthError::Cancelled),
                outcome = poll => outcome?,
            };

            if let Some(response) = outcome {
                return Ok(self.persist(&response)?);
            }

            if tokio::time::Instant::now() + std::time::Duration::from_secs(interval) > deadline {
                return Err(AuthError::Timeout);
            }

            tokio::select! {
                _ = &mut cancel => return Err(AuthError::Cancelled),
                _ = sleep(std::time::Duration::from_secs(interval)) => {}
            }
        }
    }

    /// Write the issued credentials onto the selected profile, creating the
    /// profile when the config has never seen it, and make it current.
    fn persist(&self, response: &DevicePollResponse) -> Result<Config, ConfigError> {
        let mut config = self.store.load()?;
        config.current_profile = self.profile.clone();
        let name = self.profile.clone();
        let profile = config.profiles.entry(name.clone()).or_insert(Profile {
            name,
            server: self.server.clone(),
            auth: None,
        });
        profile.server = self.server.clone();
        profile.auth = Some(Auth {
            provider_type: ProviderType::Device,
            issuer: response.issuer.clone().unwrap_or_else(|| self.server.clone()),
            client_id: response.client_id.clone().unwrap_or_default(),
            access_token: response.access_token.clone().unwrap_or_default(),
            refresh_token: response.refresh_token.clone(),
            token_type: response.token_type.clone(),
            expires_at: response
                .expires_in
                .map(|secs| Utc::now() + Duration::seconds(secs as i64)),
            user: response.user.clone(),
        });
        self.store.save(&config)?;
        Ok(config)
    }
}

/// Verify a Personal Access Token by calling the identity endpoint once,
/// then persist it as the selected profile's credentials and make that
/// profile current. On any failure nothing is written and the original
/// error surfaces.
pub async fn login_with_pat(
    store: &ConfigStore,
    server: &str,
    profile: &str,
    token: &str,
) -> Result<Me, AuthError> {
    let client = ApiClient::new(server)?.with_token(token);
    let me = client.get_me().await?;

    let mut config = store.load()?;
    config.current_profile = profile.to_string();
    let name = profile.to_string();
    let profile = config.profiles.entry(name.clone()).or_insert(Profile {
        name,
        server: server.to_string(),
        auth: None,
    });
    profile.server = server.to_string();
    profile.auth = Some(Auth {
        provider_type: ProviderType::Pat,
        issuer: server.to_string(),
        client_id: String::new(),
        access_token: token.to_string(),
        refresh_token: None,
        token_type: None,
        expires_at: None,
        user: Some(UserInfo {
            email: me.email.clone(),
            name: me.name.clone(),
            tenant_id: me.tenant_id.clone(),
        }),
    });
    store.save(&config)?;
    debug!("stored PAT credentials for profile '{}'", config.current_profile);
    Ok(me)
}

/// Best-effort server-side verification of the stored token. Offline or
/// rejected states are reported, never fatal.
pub async fn verify_with_server(config: &Config) -> Option<bool> {
    let client = match ApiClient::from_config(config) {
        Ok(client) => client,
        Err(_) => return None,
    };
    match client.get_auth_status().await {
        Ok(status) => Some(status.authenticated),
        Err(err) => {
            warn!("token verification failed: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::pending;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    /// Scripted device-auth endpoints: a fixed init response and a queue of
    /// poll responses, with call counting.
    struct ScriptedApi {
        session: DeviceAuthorization,
        polls: std::sync::Mutex<Vec<DevicePollResponse>>,
        init_calls: Arc<AtomicUsize>,
        poll_calls: Arc<AtomicUsize>,
    }

    impl ScriptedApi {
        fn new(expires_in: u64, polls: Vec<DevicePollResponse>) -> Self {
            ScriptedApi {
                session: DeviceAuthorization {
                    device_code: "dev-code".to_string(),
                    user_code: "ABCD-EFGH".to_string(),
                    verification_uri: "http://localhost:8080/device".to_string(),
                    verification_uri_complete: None,
                    expires_in,
                    interval: 0,
                },
                polls: std::sync::Mutex::new(polls),
                init_calls: Arc::new(AtomicUsize::new(0)),
                poll_calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl DeviceAuthApi for &ScriptedApi {
        async fn device_init(&self) -> Result<DeviceAuthorization, ApiError> {
            self.init_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.session.clone())
        }

        async fn device_poll(&self, _device_code: &str) -> Result<DevicePollResponse, ApiError> {
            self.poll_calls.fetch_add(1, Ordering::SeqCst);
            let mut polls = self.polls.lock().unwrap();
            if polls.is_empty() {
                return Ok(pending_response());
            }
            Ok(polls.remove(0))
        }
    }

    fn pending_response() -> DevicePollResponse {
        DevicePollResponse {
            status: Some("pending".to_string()),
            ..Default::default()
        }
    }

    fn slow_down_response() -> DevicePollResponse {
        DevicePollResponse {
            status: Some("slow_down".to_string()),
            ..Default::default()
        }
    }

    fn success_response() -> DevicePollResponse {
        DevicePollResponse {
            access_token: Some("device-token".to_string()),
            token_type: Some("Bearer".to_string()),
            expires_in: Some(3600),
            user: Some(UserInfo {
                email: "a@b.com".to_string(),
                name: "A B".to_string(),
                tenant_id: "acme".to_string(),
            }),
            ..Default::default()
        }
    }

    fn temp_store() -> (tempfile::TempDir, ConfigStore) {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.yaml"));
        (dir, store)
    }

    #[tokio::test]
    async fn pending_then_success_persists_once() {
        let api = ScriptedApi::new(
            600,
            vec![pending_response(), pending_response(), success_response()],
        );
        let (_dir, store) = temp_store();
        let flow = DeviceFlow::new(&api, store.clone(), "http://localhost:8080", "default");

        let session = flow.initiate().await.unwrap();
        let config = flow
            .poll_until_authenticated(&session, pending::<()>())
            .await
            .unwrap();

        assert_eq!(api.init_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.poll_calls.load(Ordering::SeqCst), 3);
        assert!(config.is_authenticated());

        let persisted = store.load().unwrap();
        let auth = persisted.current_profile().unwrap().auth.as_ref().unwrap();
        assert_eq!(auth.provider_type, ProviderType::Device);
        assert_eq!(auth.access_token, "device-token");
        assert!(auth.expires_at.is_some());
    }

    #[tokio::test]
    async fn only_pending_until_deadline_times_out_without_write() {
        let mut api = ScriptedApi::new(0, vec![pending_response()]);
        api.session.interval = 1;
        let (_dir, store) = temp_store();
        let flow = DeviceFlow::new(&api, store.clone(), "http://localhost:8080", "default");

        let session = flow.initiate().await.unwrap();
        let result = flow.poll_until_authenticated(&session, pending::<()>()).await;

        assert!(matches!(result, Err(AuthError::Timeout)));
        assert!(!store.path().exists());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_down_doubles_the_interval() {
        let api = ScriptedApi::new(
            600,
            vec![slow_down_response(), pending_response(), success_response()],
        );
        let (_dir, store) = temp_store();
        let flow = DeviceFlow::new(&api, store, "http://localhost:8080", "default");

        let mut session = flow.initiate().await.unwrap();
        session.interval = 2;

        let started = tokio::time::Instant::now();
        flow.poll_until_authenticated(&session, pending::<()>())
            .await
            .unwrap();
        // 4s after the slow_down (doubled from 2s), then 4s after the pending.
        assert_eq!(started.elapsed(), std::time::Duration::from_secs(8));
    }

    #[tokio::test]
    async fn unexpected_response_fails_without_retry() {
        let api = ScriptedApi::new(600, vec![DevicePollResponse::default()]);
        let (_dir, store) = temp_store();
        let flow = DeviceFlow::new(&api, store.clone(), "http://localhost:8080", "default");

        let session = flow.initiate().await.unwrap();
        let result = flow.poll_until_authenticated(&session, pending::<()>()).await;

        assert!(matches!(result, Err(AuthError::Failed(_))));
        assert_eq!(api.poll_calls.load(Ordering::SeqCst), 1);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn cancellation_leaves_config_untouched() {
        let api = ScriptedApi::new(600, vec![]);
        let (_dir, store) = temp_store();
        let flow = DeviceFlow::new(&api, store.clone(), "http://localhost:8080", "default");

        let mut session = flow.initiate().await.unwrap();
        session.interval = 30;

        let result = flow
            .poll_until_authenticated(&session, std::future::ready(()))
            .await;

        assert!(matches!(result, Err(AuthError::Cancelled)));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn login_writes_to_the_selected_profile() {
        let api = ScriptedApi::new(600, vec![success_response()]);
        let (_dir, store) = temp_store();

        let mut seeded = Config::default_config();
        seeded.profiles.insert(
            "staging".to_string(),
            Profile {
                name: "staging".to_string(),
                server: "https://staging.example.com".to_string(),
                auth: None,
            },
        );
        store.save(&seeded).unwrap();

        let flow = DeviceFlow::new(&api, store.clone(), "https://staging.example.com", "staging");
        let session = flow.initiate().await.unwrap();
        flow.poll_until_authenticated(&session, pending::<()>())
            .await
            .unwrap();

        let persisted = store.load().unwrap();
        assert_eq!(persisted.current_profile, "staging");
        let staging = persisted.profiles.get("staging").unwrap();
        let auth = staging.auth.as_ref().unwrap();
        assert_eq!(auth.access_token, "device-token");
        assert!(persisted.profiles.get("default").unwrap().auth.is_none());
    }
}
