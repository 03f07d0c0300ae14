//! Command dispatch: validation → dependencies → external calls → output
//!
//! Nothing in here terminates the process; errors propagate to `main`,
//! which emits the one report and exits.

use tracing::{debug, instrument};

use crate::application::services::{OutputTarget, ScratchOrgOutcome};
use crate::cli::args::{CreateScratchOrgArgs, SaveOrgAuthArgs};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{CreateScratchOrgRequest, OrgAuthRequest, ReportMode, ResultSource};
use crate::exitcode;
use crate::infrastructure::ServiceContainer;

/// Exit code for a clap parse failure, after printing clap's message.
///
/// `--help`/`--version` print to stdout and succeed; anything else prints
/// the error with usage to stderr and fails.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    use clap::error::ErrorKind;

    // Printing can only fail if the terminal is gone; the exit code still applies.
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => exitcode::OK,
        _ => exitcode::FAILURE,
    }
}

/// Entry point for `create-scratch-org` after argument parsing.
pub fn run_create_scratch_org(args: &CreateScratchOrgArgs) -> CliResult<()> {
    let request = args.validate()?;
    let container = ServiceContainer::new(Settings::load()?);

    let outcome = create_scratch_org(&request, &container)?;

    if args.report_mode() == ReportMode::Plain {
        if let Some(path) = &request.output {
            output::success(&format!(
                "Scratch org '{}' created (job {}), result saved to {}",
                request.alias,
                outcome.job,
                path.display()
            ));
        }
    }
    Ok(())
}

/// Entry point for `save-org-auth` after argument parsing.
pub fn run_save_org_auth(args: &SaveOrgAuthArgs) -> CliResult<()> {
    let request = args.validate()?;
    let container = ServiceContainer::new(Settings::load()?);

    save_org_auth(&request, &container)?;

    if args.report_mode() == ReportMode::Plain {
        output::success(&format!(
            "Saved org info for '{}' to {}",
            request.org,
            request.output.display()
        ));
    }
    Ok(())
}

/// Create the org, wait for it, and write the final document.
#[instrument(skip(container), fields(alias = %request.alias))]
pub fn create_scratch_org(
    request: &CreateScratchOrgRequest,
    container: &ServiceContainer,
) -> CliResult<ScratchOrgOutcome> {
    container.dependency_checker().check()?;

    let outcome = container.scratch_org_service().create(request)?;
    if outcome.source == ResultSource::InitialResponse {
        debug!("writing initial creation response as final result");
    }

    container
        .output_writer()
        .write(&outcome.document, request.output.as_deref())?;
    Ok(outcome)
}

/// Fetch org display info and persist it to the requested file.
#[instrument(skip(container), fields(org = %request.org))]
pub fn save_org_auth(
    request: &OrgAuthRequest,
    container: &ServiceContainer,
) -> CliResult<OutputTarget> {
    container.dependency_checker().check()?;

    let document = container.org_auth_service().display(request)?;
    let target = container
        .output_writer()
        .write(&document, Some(&request.output))?;
    Ok(target)
}
