//! Scratch org creation with async job polling
//!
//! Starts `org create scratch --async`, extracts the job id, blocks on
//! `org resume scratch` while progress streams to stderr, then fetches the
//! final result as JSON. If that last call fails, the initial response is
//! used instead, provided it is valid JSON on its own.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::response::{extract_job_handle, parse_document};
use crate::domain::{
    CommandResult, CreateScratchOrgRequest, ErrorCode, JobHandle, JobPhase, ResultSource,
};
use crate::infrastructure::traits::CommandRunner;

/// Final state of a successful creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScratchOrgOutcome {
    pub job: JobHandle,
    pub document: Value,
    pub source: ResultSource,
}

/// Scratch org creation service.
pub struct ScratchOrgService {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl ScratchOrgService {
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> Self {
        Self { cmd, settings }
    }

    /// Arguments for the initial asynchronous creation call.
    pub fn create_args(request: &CreateScratchOrgRequest) -> Vec<String> {
        let mut args: Vec<String> = ["org", "create", "scratch"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.extend([
            "--definition-file".to_string(),
            request.definition_file.to_string_lossy().into_owned(),
            "--alias".to_string(),
            request.alias.clone(),
            "--duration-days".to_string(),
            request.duration_days.to_string(),
            "--target-dev-hub".to_string(),
            request.target_dev_hub.clone(),
        ]);
        if request.no_namespace {
            args.push("--no-namespace".to_string());
        }
        args.push("--async".to_string());
        args.push("--json".to_string());
        args
    }

    /// Arguments for `org resume scratch`, with or without `--json`.
    pub fn resume_args(job: &JobHandle, json: bool) -> Vec<String> {
        let mut args: Vec<String> = ["org", "resume", "scratch", "--job-id", job.as_str()]
            .iter()
            .map(|s| s.to_string())
            .collect();
        if json {
            args.push("--json".to_string());
        }
        args
    }

    /// Run the whole STARTED → POLLING → RESOLVED sequence.
    pub fn create(&self, request: &CreateScratchOrgRequest) -> ApplicationResult<ScratchOrgOutcome> {
        info!(
            "create scratch org: alias={}, dev_hub={}, days={}",
            request.alias, request.target_dev_hub, request.duration_days
        );

        let initial = self.start(request)?;

        let job = extract_job_handle(&initial.stdout).map_err(|e| {
            debug!(phase = %JobPhase::Failed, "no usable job id in initial response");
            ApplicationError::from(e)
        })?;
        debug!(phase = %JobPhase::Polling, job_id = %job, "job id extracted");

        self.wait_for_job(&job);

        let (document, source) = self.fetch_final(&job, &initial.stdout)?;
        debug!(phase = %JobPhase::Resolved, job_id = %job, ?source, "job resolved");

        Ok(ScratchOrgOutcome {
            job,
            document,
            source,
        })
    }

    fn start(&self, request: &CreateScratchOrgRequest) -> ApplicationResult<CommandResult> {
        let args = Self::create_args(request);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        debug!(phase = %JobPhase::Started, "run {} {}", self.settings.cli, args.join(" "));

        let result = self
            .cmd
            .run(&self.settings.cli, &arg_refs)
            .map_err(|e| ApplicationError::CommandFailed {
                code: ErrorCode::ScratchOrgCreationFailed,
                message: format!("failed to run {}: {}", self.settings.cli, e),
                details: None,
            })?;

        if !result.success() {
            debug!(phase = %JobPhase::Failed, "creation call failed: {}", result.describe_status());
            return Err(ApplicationError::CommandFailed {
                code: ErrorCode::ScratchOrgCreationFailed,
                message: format!(
                    "failed to create scratch org '{}' ({})",
                    request.alias,
                    result.describe_status()
                ),
                details: Some(result.combined_output()),
            });
        }

        Ok(result)
    }

    /// Block until the job finishes, streaming progress to stderr.
    ///
    /// Failures here are not fatal; the final `--json` call decides.
    fn wait_for_job(&self, job: &JobHandle) {
        let args = Self::resume_args(job, false);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        debug!("wait: {} {}", self.settings.cli, args.join(" "));

        match self.cmd.run_streaming(&self.settings.cli, &arg_refs) {
            Ok(result) if result.success() => debug!("wait for job {} finished", job),
            Ok(result) => warn!(
                "waiting for job {} ended with {}",
                job,
                result.describe_status()
            ),
            Err(e) => warn!("could not wait for job {}: {}", job, e),
        }
    }

    fn fetch_final(
        &self,
        job: &JobHandle,
        initial_stdout: &str,
    ) -> ApplicationResult<(Value, ResultSource)> {
        let args = Self::resume_args(job, true);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        debug!("fetch final: {} {}", self.settings.cli, args.join(" "));

        let failure = match self.cmd.run(&self.settings.cli, &arg_refs) {
            Ok(result) if result.success() => {
                match parse_document(&result.stdout, "final scratch org result") {
                    Ok(document) => return Ok((document, ResultSource::Resume)),
                    Err(e) => e.to_string(),
                }
            }
            Ok(result) => format!("resume call ended with {}", result.describe_status()),
            Err(e) => format!("resume call could not run: {e}"),
        };

        debug!("final result unavailable ({}), trying initial response", failure);
        match parse_document(initial_stdout, "scratch org result") {
            Ok(document) => {
                warn!(
                    "using initial creation response for job {} ({}); the org may still be provisioning",
                    job, failure
                );
                Ok((document, ResultSource::InitialResponse))
            }
            Err(e) => {
                debug!(phase = %JobPhase::Failed, "initial response is not valid JSON either");
                Err(e.into())
            }
        }
    }
}
