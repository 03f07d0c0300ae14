use std::process;

use clap::Parser;

use sfwrap::cli::commands::{parse_error_exit_code, run_create_scratch_org};
use sfwrap::cli::logging::setup_logging;
use sfwrap::cli::output;
use sfwrap::cli::CreateScratchOrgArgs;

fn main() {
    let args = match CreateScratchOrgArgs::try_parse() {
        Ok(args) => args,
        Err(e) => process::exit(parse_error_exit_code(&e)),
    };

    setup_logging(args.verbose);

    if let Err(e) = run_create_scratch_org(&args) {
        output::report(args.report_mode(), &e.to_envelope());
        process::exit(e.exit_code());
    }
}
