//! Multi-profile configuration for the Shoehorn CLI.
//!
//! The configuration lives in a single YAML file under `~/.shoehorn/` and
//! holds one or more named profiles, each pairing a server URL with its
//! credentials. Exactly one profile is current at any time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_DIR_NAME: &str = ".shoehorn";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const CONFIG_VERSION: &str = "1.0";
pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "SHOEHORN_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to resolve the home directory")]
    NoHomeDirectory,
    #[error("configuration file is corrupt: {0}")]
    Corrupt(#[from] serde_yaml::Error),
    #[error("profile '{0}' not found")]
    ProfileNotFound(String),
    #[error("failed to read or write configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Credential provider discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Device,
    Pat,
}

/// Snapshot of the authenticated user, captured at login time and not
/// refreshed until the next login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tenant_id: String,
}

/// Credentials attached to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auth {
    pub provider_type: ProviderType,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

/// A named server + credential pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    pub current_profile: String,
    pub profiles: BTreeMap<String, Profile>,
}

impl Config {
    /// A single-profile configuration pointing at a local server. Used when
    /// no configuration file exists yet.
    pub fn default_config() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            DEFAULT_PROFILE.to_string(),
            Profile {
                name: "Default".to_string(),
                server: DEFAULT_SERVER.to_string(),
                auth: None,
            },
        );
        Config {
            version: CONFIG_VERSION.to_string(),
            current_profile: DEFAULT_PROFILE.to_string(),
            profiles,
        }
    }

    pub fn current_profile(&self) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(&self.current_profile)
            .ok_or_else(|| ConfigError::ProfileNotFound(self.current_profile.clone()))
    }

    /// Insert or replace a profile by name.
    pub fn set_profile(&mut self, name: &str, profile: Profile) {
        self.profiles.insert(name.to_string(), profile);
    }

    /// True iff the current profile carries a non-empty access token,
    /// regardless of expiry.
    pub fn is_authenticated(&self) -> bool {
        match self.current_profile() {
            Ok(profile) => profile
                .auth
                .as_ref()
                .is_some_and(|auth| !auth.access_token.is_empty()),
            Err(_) => false,
        }
    }

    pub fn is_pat_auth(&self) -> bool {
        match self.current_profile() {
            Ok(profile) => profile
                .auth
                .as_ref()
                .is_some_and(|auth| auth.provider_type == ProviderType::Pat),
            Err(_) => false,
        }
    }

    /// PATs never expire. Device tokens without an `expires_at` are treated
    /// as expired (fail-safe), otherwise expiry is compared against now.
    pub fn is_token_expired(&self) -> bool {
        let profile = match self.current_profile() {
            Ok(profile) => profile,
            Err(_) => return true,
        };
        let auth = match &profile.auth {
            Some(auth) => auth,
            None => return true,
        };
        match auth.provider_type {
            ProviderType::Pat => false,
            ProviderType::Device => match auth.expires_at {
                Some(expires_at) => Utc::now() >= expires_at,
                None => true,
            },
        }
    }

    /// Drop credentials from the current profile. This only touches local
    /// state; tokens are never revoked on the server.
    pub fn clear_auth(&mut self) -> Result<(), ConfigError> {
        let name = self.current_profile.clone();
        let profile = self
            .profiles
            .get_mut(&name)
            .ok_or(ConfigError::ProfileNotFound(name))?;
        profile.auth = None;
        Ok(())
    }
}

/// Loads and saves the configuration file at a fixed location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        ConfigStore { path }
    }

    /// Resolve the default config file path, honoring `SHOEHORN_CONFIG_DIR`.
    pub fn default_location() -> Result<Self, ConfigError> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(ConfigStore::new(PathBuf::from(dir).join(CONFIG_FILE_NAME)));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(ConfigStore::new(
            home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the configuration, falling back to the default single-profile
    /// configuration when the file does not exist. An unparseable file is an
    /// error rather than silently replaced.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            debug!("no config at {:?}, using defaults", self.path);
            return Ok(Config::default_config());
        }
        let raw = fs::read_to_string(&self.path)?;
        let config: Config = serde_yaml::from_str(&raw)?;
        Ok(config)
    }

    /// Serialize and rewrite the whole configuration file, creating the
    /// containing directory if necessary. Credentials are stored in the
    /// clear, so both get owner-only permissions.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(parent, fs::Permissions::from_mode(0o700))?;
            }
        }
        let raw = serde_yaml::to_string(config).map_err(ConfigError::Corrupt)?;
        self.write_owner_only(raw.as_bytes())?;
        debug!("saved config to {:?}", self.path);
        Ok(())
    }

    // The file must never be readable by others, not even between creation
    // and a later chmod, so the mode is set at open time.
    #[cfg(unix)]
    fn write_owner_only(&self, raw: &[u8]) -> Result<(), ConfigError> {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&self.path)?;
        file.write_all(raw)?;
        // A file that predates this store may carry wider permissions.
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn write_owner_only(&self, raw: &[u8]) -> Result<(), ConfigError> {
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
