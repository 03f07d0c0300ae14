//! Org auth/display capture service

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::response::parse_document;
use crate::domain::{ErrorCode, OrgAuthRequest};
use crate::infrastructure::traits::CommandRunner;

/// Fetches `org display --verbose --json` for an authenticated org.
pub struct OrgAuthService {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl OrgAuthService {
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> Self {
        Self { cmd, settings }
    }

    pub fn display_args(org: &str) -> Vec<String> {
        ["org", "display", "--target-org", org, "--verbose", "--json"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Fetch the display document for `request.org`.
    ///
    /// # Returns
    /// The parsed response, unchanged in shape
    pub fn display(&self, request: &OrgAuthRequest) -> ApplicationResult<Value> {
        let args = Self::display_args(&request.org);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        debug!("display: {} {}", self.settings.cli, args.join(" "));

        let result = self
            .cmd
            .run(&self.settings.cli, &arg_refs)
            .map_err(|e| ApplicationError::CommandFailed {
                code: ErrorCode::OrgDisplayFailed,
                message: format!("failed to run {}: {}", self.settings.cli, e),
                details: None,
            })?;

        if !result.success() {
            return Err(ApplicationError::CommandFailed {
                code: ErrorCode::OrgDisplayFailed,
                message: format!(
                    "failed to get org display info for '{}' ({})",
                    request.org,
                    result.describe_status()
                ),
                details: Some(result.combined_output()),
            });
        }

        let document = parse_document(&result.stdout, "org display response")?;
        debug!("display: received document for {}", request.org);
        Ok(document)
    }
}
