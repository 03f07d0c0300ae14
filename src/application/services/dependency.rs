//! Preflight check for required external executables

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::infrastructure::traits::ExecutableLocator;

/// Remediation hint shown when `tool` cannot be found.
pub fn install_hint(tool: &str) -> String {
    let name = std::path::Path::new(tool)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(tool);

    match name {
        "sf" => "Install the Salesforce CLI: npm install --global @salesforce/cli".to_string(),
        "sfdx" => "Install the Salesforce CLI (sfdx is bundled with it): npm install --global @salesforce/cli".to_string(),
        "jq" => "Install jq: https://jqlang.github.io/jq/download/".to_string(),
        other => format!("Install '{other}' and make sure it is on your PATH"),
    }
}

/// Fail-fast check that every required executable resolves.
pub struct DependencyChecker {
    locator: Arc<dyn ExecutableLocator>,
    settings: Arc<Settings>,
}

impl DependencyChecker {
    pub fn new(locator: Arc<dyn ExecutableLocator>, settings: Arc<Settings>) -> Self {
        Self { locator, settings }
    }

    /// Check tools in declared order, stopping at the first missing one.
    pub fn check(&self) -> ApplicationResult<()> {
        let tools = self.settings.required_tools();
        debug!("check dependencies: {:?}", tools);

        for tool in tools {
            match self.locator.locate(&tool) {
                Some(path) => debug!("dependency {} -> {}", tool, path.display()),
                None => {
                    let hint = install_hint(&tool);
                    return Err(ApplicationError::MissingDependency { tool, hint });
                }
            }
        }
        Ok(())
    }
}
