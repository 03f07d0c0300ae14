//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the response contract
/// of the wrapped CLI. These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("failed to extract job ID from scratch org creation response")]
    NoJobId { details: Option<String> },

    #[error("{context} is not valid JSON")]
    InvalidJson {
        context: String,
        details: Option<String>,
    },
}

impl DomainError {
    /// Attach raw captured output for diagnosis.
    pub fn with_details(self, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let details = Some(raw).filter(|d| !d.trim().is_empty());
        match self {
            DomainError::NoJobId { .. } => DomainError::NoJobId { details },
            DomainError::InvalidJson { context, .. } => DomainError::InvalidJson { context, details },
        }
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            DomainError::NoJobId { details } | DomainError::InvalidJson { details, .. } => {
                details.as_deref()
            }
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
