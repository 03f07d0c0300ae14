//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{DomainError, ErrorCode};

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("required dependency '{tool}' is not installed or not on PATH")]
    MissingDependency { tool: String, hint: String },

    #[error("{message}")]
    CommandFailed {
        code: ErrorCode,
        message: String,
        details: Option<String>,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Reportable code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ApplicationError::Domain(DomainError::NoJobId { .. }) => ErrorCode::NoJobId,
            ApplicationError::Domain(DomainError::InvalidJson { .. }) => ErrorCode::InvalidJson,
            ApplicationError::MissingDependency { .. } => ErrorCode::MissingDependency,
            ApplicationError::CommandFailed { code, .. } => *code,
            ApplicationError::Io { .. } => ErrorCode::OutputWriteFailed,
            ApplicationError::Config { .. } => ErrorCode::InvalidConfig,
        }
    }

    /// Free-text diagnostics (raw captured output, remediation hints).
    pub fn details(&self) -> Option<String> {
        match self {
            ApplicationError::Domain(e) => e.details().map(str::to_string),
            ApplicationError::MissingDependency { hint, .. } => Some(hint.clone()),
            ApplicationError::CommandFailed { details, .. } => details.clone(),
            ApplicationError::Io { source, .. } => Some(source.to_string()),
            ApplicationError::Config { .. } => None,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
