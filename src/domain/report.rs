//! Error codes and the machine-readable failure envelope

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Fixed enumeration of reportable failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingArguments,
    InvalidArguments,
    MissingDependency,
    ScratchOrgCreationFailed,
    NoJobId,
    InvalidJson,
    OrgDisplayFailed,
    OutputWriteFailed,
    InvalidConfig,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::MissingArguments,
        ErrorCode::InvalidArguments,
        ErrorCode::MissingDependency,
        ErrorCode::ScratchOrgCreationFailed,
        ErrorCode::NoJobId,
        ErrorCode::InvalidJson,
        ErrorCode::OrgDisplayFailed,
        ErrorCode::OutputWriteFailed,
        ErrorCode::InvalidConfig,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingArguments => "MISSING_ARGUMENTS",
            ErrorCode::InvalidArguments => "INVALID_ARGUMENTS",
            ErrorCode::MissingDependency => "MISSING_DEPENDENCY",
            ErrorCode::ScratchOrgCreationFailed => "SCRATCH_ORG_CREATION_FAILED",
            ErrorCode::NoJobId => "NO_JOB_ID",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::OrgDisplayFailed => "ORG_DISPLAY_FAILED",
            ErrorCode::OutputWriteFailed => "OUTPUT_WRITE_FAILED",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reportable failure.
///
/// Empty details are normalized to `None` so they never reach the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: details.filter(|d| !d.trim().is_empty()),
        }
    }

    /// `{"success":false,"error":{"code":..,"message":..[,"details":..]}}` on one line.
    pub fn to_json_line(&self) -> String {
        let mut error = json!({
            "code": self.code.as_str(),
            "message": self.message,
        });
        if let Some(details) = &self.details {
            error["details"] = Value::String(details.clone());
        }
        json!({ "success": false, "error": error }).to_string()
    }

    /// Message line followed by the raw details lines.
    pub fn to_plain_lines(&self) -> Vec<String> {
        let mut lines = vec![self.message.clone()];
        if let Some(details) = &self.details {
            lines.extend(details.lines().map(str::to_string));
        }
        lines
    }
}
