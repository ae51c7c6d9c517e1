//! Command handlers.
//!
//! Each handler receives the parsed arguments plus an [`ActionContext`]
//! carrying the loaded configuration and presentation settings, performs the
//! API calls, and prints the result. Handlers return errors; exit-code
//! mapping happens at the top level.

use clap::ArgMatches;
use std::str::FromStr;
use thiserror::Error;

use crate::{
    client::{normalize_server_url, ApiClient, ApiError},
    commands::params::{
        PARAMETER_NO_INTERACTIVE, PARAMETER_OUTPUT, PARAMETER_PROFILE, PARAMETER_SERVER,
    },
    config::{Config, ConfigError, ConfigStore, Profile},
    format::{FormattingError, OutputFormat},
    ui::{self, OutputMode},
};

pub mod auth;
pub mod catalog;
pub mod forge;
pub mod manifest;
pub mod search;

#[derive(Debug, Error)]
pub enum CliActionError {
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("{0}")]
    AuthError(#[from] crate::auth::AuthError),

    #[error("{0}")]
    ConfigError(#[from] ConfigError),

    #[error("{0}")]
    FormattingError(#[from] FormattingError),

    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    #[error("Invalid value for {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("Manifest failed validation with {count} error(s)")]
    ValidationFailed { count: usize },
}

/// Per-invocation state shared by all handlers: the credential store, the
/// loaded configuration with profile and server overrides applied, and the
/// resolved output settings.
pub struct ActionContext {
    pub store: ConfigStore,
    pub config: Config,
    pub server: String,
    pub format: OutputFormat,
    pub mode: OutputMode,
}

impl ActionContext {
    /// Build the context from the global arguments. Profile and server
    /// overrides apply to this invocation only; nothing is written back
    /// unless a handler saves explicitly.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliActionError> {
        let store = ConfigStore::default_location()?;
        let mut config = store.load()?;

        if let Some(profile) = matches.get_one::<String>(PARAMETER_PROFILE) {
            if !config.profiles.contains_key(profile) {
                return Err(ConfigError::ProfileNotFound(profile.clone()).into());
            }
            config.current_profile = profile.clone();
        }

        let server = match matches.get_one::<String>(PARAMETER_SERVER) {
            Some(server) => {
                let server = normalize_server_url(server);
                let name = config.current_profile.clone();
                let profile = config
                    .profiles
                    .entry(name.clone())
                    .or_insert_with(|| Profile {
                        name,
                        server: server.clone(),
                        auth: None,
                    });
                profile.server = server.clone();
                server
            }
            None => config
                .current_profile()
                .map(|p| p.server.clone())
                .unwrap_or_default(),
        };

        let format = match matches.get_one::<String>(PARAMETER_OUTPUT) {
            Some(raw) => OutputFormat::from_str(raw)?,
            None => OutputFormat::Table,
        };
        let mode = ui::detect_mode(matches.get_flag(PARAMETER_NO_INTERACTIVE));

        Ok(ActionContext {
            store,
            config,
            server,
            format,
            mode,
        })
    }

    /// An authenticated API client for the active profile.
    pub fn client(&self) -> Result<ApiClient, CliActionError> {
        Ok(ApiClient::from_config(&self.config)?)
    }

    /// True when the caller asked for JSON or YAML instead of a table.
    pub fn structured(&self) -> bool {
        self.format != OutputFormat::Table
    }

    /// Serialize for the structured formats.
    pub fn render_structured<T: serde::Serialize>(
        &self,
        value: &T,
    ) -> Result<String, CliActionError> {
        let out = match self.format {
            OutputFormat::Json => crate::format::render_json(value)?,
            OutputFormat::Yaml => crate::format::render_yaml(value)?,
            OutputFormat::Table => crate::format::render_json(value)?,
        };
        Ok(out)
    }
}

pub(crate) fn required<'a>(
    matches: &'a ArgMatches,
    name: &str,
) -> Result<&'a String, CliActionError> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| CliActionError::MissingRequiredArgument(name.to_string()))
}
