use std::process;

use clap::Parser;

use sfwrap::cli::commands::{parse_error_exit_code, run_save_org_auth};
use sfwrap::cli::logging::setup_logging;
use sfwrap::cli::output;
use sfwrap::cli::SaveOrgAuthArgs;

fn main() {
    let args = match SaveOrgAuthArgs::try_parse() {
        Ok(args) => args,
        Err(e) => process::exit(parse_error_exit_code(&e)),
    };

    setup_logging(args.verbose);

    if let Err(e) = run_save_org_auth(&args) {
        output::report(args.report_mode(), &e.to_envelope());
        process::exit(e.exit_code());
    }
}
