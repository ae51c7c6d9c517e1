//! Process exit codes for the Shoehorn CLI.
//!
//! Scripts depend on these values, so they are part of the CLI contract:
//! anything beyond a generic failure gets its own code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Generic error
    Error = 1,
    /// Authentication required or rejected
    AuthRequired = 2,
    /// Resource not found
    NotFound = 3,
    /// Validation error
    Validation = 4,
    /// Operation deadline exceeded
    Timeout = 5,
    /// Operation cancelled by the user
    Cancelled = 6,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn message(&self) -> &'static str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::Error => "Error",
            ExitCode::AuthRequired => "Authentication required",
            ExitCode::NotFound => "Resource not found",
            ExitCode::Validation => "Validation error",
            ExitCode::Timeout => "Operation timed out",
            ExitCode::Cancelled => "Operation cancelled",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}
