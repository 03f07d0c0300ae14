//! Domain entities: core data structures

use std::fmt;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Marker the wrapped CLI (and `jq -r`) prints for an absent value.
pub const NULL_MARKER: &str = "null";

/// Validated input for creating a scratch org.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateScratchOrgRequest {
    /// Scratch org definition file (`project-scratch-def.json`)
    pub definition_file: PathBuf,
    /// Alias to register the new org under
    pub alias: String,
    /// Lifetime of the org in days
    pub duration_days: u32,
    /// Dev Hub username or alias that provisions the org
    pub target_dev_hub: String,
    /// Create the org without a namespace
    pub no_namespace: bool,
    /// Where to write the final result (stdout if None)
    pub output: Option<PathBuf>,
}

/// Validated input for capturing org auth/display info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgAuthRequest {
    /// Username or alias of an authenticated org
    pub org: String,
    /// Destination file for the display document
    pub output: PathBuf,
}

/// How failures are rendered for the whole invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Human-readable lines on stderr
    #[default]
    Plain,
    /// Single-line JSON envelope on stdout
    Json,
}

impl ReportMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Plain
        }
    }
}

/// Outcome of one external invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Exit code; None if terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn new(status: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Captured stdout followed by stderr, trimmed, for error details.
    pub fn combined_output(&self) -> String {
        [self.stdout.trim(), self.stderr.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn describe_status(&self) -> String {
        match self.status {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Identifier of an asynchronous scratch org creation job.
///
/// Never empty and never the literal null marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobHandle(String);

impl JobHandle {
    /// Validate a raw extracted identifier.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw.map(str::trim) {
            Some(id) if !id.is_empty() && id != NULL_MARKER => Ok(Self(id.to_string())),
            _ => Err(DomainError::NoJobId { details: None }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phases of the scratch org job poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    Started,
    Polling,
    Resolved,
    Failed,
}

impl fmt::Display for JobPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobPhase::Started => "STARTED",
            JobPhase::Polling => "POLLING",
            JobPhase::Resolved => "RESOLVED",
            JobPhase::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// Where the final scratch org document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// The `--json` resume call after the wait
    Resume,
    /// The initial creation response, used when the resume call failed
    InitialResponse,
}

/// Expand environment variables in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Uses shellexpand crate for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
