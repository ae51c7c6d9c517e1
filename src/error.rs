use thiserror::Error;

use crate::{
    actions::CliActionError,
    auth::AuthError,
    client::{ApiError, ErrorCategory},
    exit_codes::ExitCode,
};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or management
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] crate::config::ConfigError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] crate::format::FormattingError),
    /// Error when a required command-line argument is missing
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    #[error("API error: {0}")]
    ApiError(#[from] ApiError),

    #[error("{0}")]
    AuthError(#[from] AuthError),

    #[error("{0}")]
    ActionError(#[from] CliActionError),
}

impl CliError {
    /// Get the process exit code for this error.
    ///
    /// Authentication problems map to `AuthRequired`, missing resources to
    /// `NotFound`, rejected input to `Validation`, and the device flow's
    /// timeout and cancellation outcomes to their dedicated codes. Anything
    /// else is a general error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::ApiError(err) => api_exit_code(err),
            CliError::ActionError(CliActionError::ApiError(err)) => api_exit_code(err),
            CliError::ActionError(CliActionError::ValidationFailed { .. }) => ExitCode::Validation,
            CliError::AuthError(err) => auth_exit_code(err),
            CliError::ActionError(CliActionError::AuthError(err)) => auth_exit_code(err),
            _ => ExitCode::Error,
        }
    }
}

fn api_exit_code(err: &ApiError) -> ExitCode {
    match err.category() {
        ErrorCategory::Auth => ExitCode::AuthRequired,
        ErrorCategory::NotFound => ExitCode::NotFound,
        ErrorCategory::Validation => ExitCode::Validation,
        _ => ExitCode::Error,
    }
}

fn auth_exit_code(err: &AuthError) -> ExitCode {
    match err {
        AuthError::Timeout => ExitCode::Timeout,
        AuthError::Cancelled => ExitCode::Cancelled,
        AuthError::Api(api) => api_exit_code(api),
        _ => ExitCode::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_maps_to_exit_code() {
        let not_found = CliError::ApiError(ApiError::Api {
            status: 404,
            message: "no such entity".to_string(),
        });
        assert_eq!(not_found.exit_code(), ExitCode::NotFound);

        let unauthorized = CliError::ApiError(ApiError::Api {
            status: 401,
            message: "token expired".to_string(),
        });
        assert_eq!(unauthorized.exit_code(), ExitCode::AuthRequired);

        let invalid = CliError::ApiError(ApiError::Api {
            status: 422,
            message: "bad manifest".to_string(),
        });
        assert_eq!(invalid.exit_code(), ExitCode::Validation);
    }

    #[test]
    fn missing_credentials_require_auth() {
        let err = CliError::ApiError(ApiError::NotAuthenticated);
        assert_eq!(err.exit_code(), ExitCode::AuthRequired);
    }

    #[test]
    fn device_flow_outcomes_have_dedicated_codes() {
        assert_eq!(
            CliError::AuthError(AuthError::Timeout).exit_code(),
            ExitCode::Timeout
        );
        assert_eq!(
            CliError::AuthError(AuthError::Cancelled).exit_code(),
            ExitCode::Cancelled
        );
    }

    #[test]
    fn everything_else_is_a_general_error() {
        let err = CliError::UnsupportedSubcommand("frobnicate".to_string());
        assert_eq!(err.exit_code(), ExitCode::Error);
    }
}
