//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorCode, ErrorEnvelope};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("missing required arguments: {}", .flags.join(", "))]
    MissingArguments { flags: Vec<&'static str> },

    #[error("invalid value '{value}' for {flag}: expected {expected}")]
    InvalidArgument {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Application(e) => e.code(),
            CliError::MissingArguments { .. } => ErrorCode::MissingArguments,
            CliError::InvalidArgument { .. } => ErrorCode::InvalidArguments,
        }
    }

    /// Build the single report emitted for this failure.
    pub fn to_envelope(&self) -> ErrorEnvelope {
        let details = match self {
            CliError::Application(e) => e.details(),
            CliError::MissingArguments { .. } | CliError::InvalidArgument { .. } => None,
        };
        ErrorEnvelope::new(self.code(), self.to_string(), details)
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        crate::exitcode::FAILURE
    }
}
