//! CLI layer: argument parsing, command dispatch, and error reporting

pub mod args;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use args::{CreateScratchOrgArgs, SaveOrgAuthArgs};
pub use error::{CliError, CliResult};
