//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::domain::CommandResult;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Write string content to file, replacing any previous content.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments, capturing stdout and stderr.
    ///
    /// A non-zero exit is not an error; only failure to spawn is.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<CommandResult>;

    /// Run a command with its stdout redirected to our stderr.
    ///
    /// Nothing is captured; the returned result only carries the status.
    fn run_streaming(&self, cmd: &str, args: &[&str]) -> io::Result<CommandResult>;
}

/// Resolves executable names against the search path.
pub trait ExecutableLocator: Send + Sync {
    /// Full path of `program`, or None if it cannot be resolved.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.exists(parent) {
                self.create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<CommandResult> {
        Command::new(cmd)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map(command_result)
    }

    fn run_streaming(&self, cmd: &str, args: &[&str]) -> io::Result<CommandResult> {
        let status = Command::new(cmd)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandResult::new(status.code(), "", ""))
    }
}

fn command_result(output: Output) -> CommandResult {
    CommandResult::new(
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    )
}

/// Real locator backed by the `which` crate.
#[derive(Debug, Default)]
pub struct PathLocator;

impl ExecutableLocator for PathLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_nested_missing_parent_when_ensure_parent_then_creates_dirs() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("b").join("out.json");

        RealFileSystem.ensure_parent(&target).unwrap();

        assert!(temp.path().join("a").join("b").is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn given_bare_filename_when_ensure_parent_then_noop() {
        RealFileSystem
            .ensure_parent(Path::new("out.json"))
            .unwrap();
    }

    #[test]
    fn given_unknown_program_when_locate_then_none() {
        assert!(PathLocator
            .locate("sfwrap-definitely-not-installed-xyz")
            .is_none());
    }

    #[cfg(unix)]
    #[test]
    fn given_failing_command_when_run_then_returns_result_not_error() {
        let result = RealCommandRunner
            .run("sh", &["-c", "echo out; echo err >&2; exit 3"])
            .unwrap();

        assert_eq!(result.status, Some(3));
        assert_eq!(result.stdout.trim(), "out");
        assert_eq!(result.stderr.trim(), "err");
    }

    #[test]
    fn given_missing_program_when_run_then_spawn_error() {
        let result = RealCommandRunner.run("sfwrap-definitely-not-installed-xyz", &[]);
        assert!(result.is_err());
    }
}
