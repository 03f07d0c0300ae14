//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/sfwrap/sfwrap.toml`
//! 3. Environment variables: `SFWRAP_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Default name of the wrapped Salesforce CLI binary.
pub const DEFAULT_CLI: &str = "sf";

/// Unified configuration for sfwrap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Wrapped CLI binary, name or path (default: sf)
    pub cli: String,
    /// Additional executables that must be on PATH, checked after `cli`
    pub extra_tools: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cli: DEFAULT_CLI.to_string(),
            extra_tools: Vec::new(),
        }
    }
}

/// Get the XDG config directory for sfwrap.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sfwrap").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("sfwrap.toml"))
}

impl Settings {
    /// Required executables in check order: the wrapped CLI first.
    pub fn required_tools(&self) -> Vec<String> {
        std::iter::once(self.cli.clone())
            .chain(self.extra_tools.iter().cloned())
            .filter(|t| !t.trim().is_empty())
            .collect()
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.cli = expand_env_vars(&self.cli);
    }

    /// Load settings from the global config file and the process environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), None)
    }

    /// Load settings from explicit sources.
    ///
    /// # Arguments
    /// * `config_file` - TOML file to layer over defaults (skipped if missing)
    /// * `env` - Environment map to read `SFWRAP_*` from (process env if None)
    pub fn load_from(
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("cli", defaults.cli.clone())
            .map_err(config_err)?
            .set_default("extra_tools", defaults.extra_tools.clone())
            .map_err(config_err)?;

        if let Some(path) = config_file {
            if path.exists() {
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("SFWRAP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("extra_tools")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        // Expand ~ and $VAR in path-like fields
        settings.expand_paths();

        Ok(settings)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
