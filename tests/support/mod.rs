//! Shared mocks for the I/O boundary traits
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sfwrap::config::Settings;
use sfwrap::domain::CommandResult;
use sfwrap::infrastructure::traits::{
    CommandRunner, ExecutableLocator, FileSystem, RealFileSystem,
};
use sfwrap::infrastructure::ServiceContainer;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub streaming: bool,
}

impl Call {
    pub fn joined(&self) -> String {
        self.args.join(" ")
    }
}

/// Mock runner that replays scripted results in call order and records calls.
pub struct MockCommandRunner {
    responses: Mutex<VecDeque<io::Result<CommandResult>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a completed run.
    pub fn then(self, status: i32, stdout: &str, stderr: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(CommandResult::new(Some(status), stdout, stderr)));
        self
    }

    /// Queue a spawn failure.
    pub fn then_spawn_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(io::Error::new(io::ErrorKind::NotFound, message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, cmd: &str, args: &[&str], streaming: bool) -> io::Result<CommandResult> {
        self.calls.lock().unwrap().push(Call {
            program: cmd.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            streaming,
        });
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("no scripted response for: {} {}", cmd, args.join(" ")),
            ))
        })
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<CommandResult> {
        self.next(cmd, args, false)
    }

    fn run_streaming(&self, cmd: &str, args: &[&str]) -> io::Result<CommandResult> {
        self.next(cmd, args, true)
    }
}

/// Locator that knows a fixed set of programs and records lookups.
pub struct MockLocator {
    known: HashMap<String, PathBuf>,
    lookups: Mutex<Vec<String>>,
}

impl MockLocator {
    pub fn with(programs: &[&str]) -> Self {
        Self {
            known: programs
                .iter()
                .map(|p| (p.to_string(), PathBuf::from("/usr/local/bin").join(p)))
                .collect(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl ExecutableLocator for MockLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.lookups.lock().unwrap().push(program.to_string());
        self.known.get(program).cloned()
    }
}

/// Filesystem whose writes always fail.
pub struct ReadOnlyFileSystem;

impl FileSystem for ReadOnlyFileSystem {
    fn write(&self, _path: &Path, _content: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"))
    }

    fn ensure_parent(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

pub fn settings() -> Settings {
    Settings::default()
}

pub fn container(runner: Arc<MockCommandRunner>, locator: Arc<MockLocator>) -> ServiceContainer {
    ServiceContainer::with_deps(settings(), Arc::new(RealFileSystem), runner, locator)
}

pub const JOB_ID: &str = "2SR5g000000TEST";

pub fn initial_response() -> String {
    format!(r#"{{"status":0,"result":{{"jobId":"{JOB_ID}","username":"test-abc@example.com"}}}}"#)
}

pub fn final_response() -> &'static str {
    r#"{"status":0,"result":{"orgId":"00D5g000000TEST","username":"test-abc@example.com","scratchOrgInfo":{"Id":"2SR5g000000TEST","Status":"Active"}}}"#
}
