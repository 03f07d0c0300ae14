//! CLI argument definitions using clap
//!
//! Required flags are `Option`s so that their absence is reported by
//! [`CreateScratchOrgArgs::validate`] as `MISSING_ARGUMENTS` in the selected
//! report mode, not by clap.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueHint};

use crate::cli::error::CliError;
use crate::domain::{CreateScratchOrgRequest, OrgAuthRequest, ReportMode};

/// Create a scratch org from a definition file and wait until it is ready
#[derive(Parser, Debug)]
#[command(name = "create-scratch-org")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct CreateScratchOrgArgs {
    /// Scratch org definition file
    #[arg(short = 'd', long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub definition_file: Option<PathBuf>,

    /// Alias for the new scratch org
    #[arg(short = 'a', long)]
    pub alias: Option<String>,

    /// Days before the scratch org expires (positive whole number)
    #[arg(short = 't', long, value_name = "DAYS")]
    pub duration_days: Option<String>,

    /// Dev Hub username or alias
    #[arg(short = 'h', long, value_name = "DEV_HUB")]
    pub target_dev_hub: Option<String>,

    /// Create the scratch org without a namespace
    #[arg(short = 'n', long)]
    pub no_namespace: bool,

    /// Write the final JSON result to this file instead of stdout
    #[arg(short = 'f', long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Report errors as a single-line JSON object
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

/// Save auth and display info of an org to a JSON file
#[derive(Parser, Debug)]
#[command(name = "save-org-auth")]
#[command(author, version, about, long_about = None)]
pub struct SaveOrgAuthArgs {
    /// Username or alias of the org
    #[arg(short = 'o', long)]
    pub org: Option<String>,

    /// Output file for the org display JSON
    #[arg(short = 'f', long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Report errors as a single-line JSON object
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn present_str(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Positive day count, or None if `raw` is not one.
fn parse_days(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|days| *days > 0)
}

fn present_path(value: &Option<PathBuf>) -> Option<&Path> {
    value.as_deref().filter(|p| !p.as_os_str().is_empty())
}

impl CreateScratchOrgArgs {
    pub fn report_mode(&self) -> ReportMode {
        ReportMode::from_json_flag(self.json)
    }

    /// Build the request, listing every missing required flag.
    ///
    /// Missing flags are reported before a malformed duration.
    pub fn validate(&self) -> Result<CreateScratchOrgRequest, CliError> {
        let definition_file = present_path(&self.definition_file);
        let alias = present_str(&self.alias);
        let duration_days = present_str(&self.duration_days);
        let target_dev_hub = present_str(&self.target_dev_hub);

        match (definition_file, alias, duration_days, target_dev_hub) {
            (Some(definition_file), Some(alias), Some(days), Some(target_dev_hub)) => {
                let duration_days = parse_days(days).ok_or_else(|| CliError::InvalidArgument {
                    flag: "--duration-days",
                    value: days.to_string(),
                    expected: "a positive whole number of days",
                })?;
                Ok(CreateScratchOrgRequest {
                    definition_file: definition_file.to_path_buf(),
                    alias: alias.to_string(),
                    duration_days,
                    target_dev_hub: target_dev_hub.to_string(),
                    no_namespace: self.no_namespace,
                    output: present_path(&self.file).map(Path::to_path_buf),
                })
            }
            _ => {
                let flags = [
                    ("--definition-file", definition_file.is_some()),
                    ("--alias", alias.is_some()),
                    ("--duration-days", duration_days.is_some()),
                    ("--target-dev-hub", target_dev_hub.is_some()),
                ]
                .into_iter()
                .filter(|(_, present)| !present)
                .map(|(flag, _)| flag)
                .collect();
                Err(CliError::MissingArguments { flags })
            }
        }
    }
}

impl SaveOrgAuthArgs {
    pub fn report_mode(&self) -> ReportMode {
        ReportMode::from_json_flag(self.json)
    }

    /// Build the request, listing every missing required flag.
    pub fn validate(&self) -> Result<OrgAuthRequest, CliError> {
        match (present_str(&self.org), present_path(&self.file)) {
            (Some(org), Some(file)) => Ok(OrgAuthRequest {
                org: org.to_string(),
                output: file.to_path_buf(),
            }),
            (org, file) => {
                let flags = [("--org", org.is_some()), ("--file", file.is_some())]
                    .into_iter()
                    .filter(|(_, present)| !present)
                    .map(|(flag, _)| flag)
                    .collect();
                Err(CliError::MissingArguments { flags })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use rstest::rstest;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        CreateScratchOrgArgs::command().debug_assert();
        SaveOrgAuthArgs::command().debug_assert();
    }

    fn create(args: &[&str]) -> Result<CreateScratchOrgArgs, clap::Error> {
        CreateScratchOrgArgs::try_parse_from(std::iter::once("create-scratch-org").chain(args.iter().copied()))
    }

    fn auth(args: &[&str]) -> Result<SaveOrgAuthArgs, clap::Error> {
        SaveOrgAuthArgs::try_parse_from(std::iter::once("save-org-auth").chain(args.iter().copied()))
    }

    #[test]
    fn given_short_flags_when_parse_then_same_as_long() {
        let short = create(&[
            "-d", "config/def.json", "-a", "feature", "-t", "7", "-h", "DevHub", "-n", "-f", "out/org.json",
        ])
        .unwrap();
        let long = create(&[
            "--definition-file", "config/def.json", "--alias", "feature", "--duration-days", "7",
            "--target-dev-hub", "DevHub", "--no-namespace", "--file", "out/org.json",
        ])
        .unwrap();

        let expected = CreateScratchOrgRequest {
            definition_file: PathBuf::from("config/def.json"),
            alias: "feature".into(),
            duration_days: 7,
            target_dev_hub: "DevHub".into(),
            no_namespace: true,
            output: Some(PathBuf::from("out/org.json")),
        };
        assert_eq!(short.validate().unwrap(), expected);
        assert_eq!(long.validate().unwrap(), expected);
    }

    #[test]
    fn given_no_optional_flags_when_parse_then_booleans_false_and_no_output() {
        let args = create(&["-d", "d.json", "-a", "x", "-t", "1", "-h", "hub"]).unwrap();
        assert!(!args.json);
        assert_eq!(args.report_mode(), ReportMode::Plain);

        let request = args.validate().unwrap();
        assert!(!request.no_namespace);
        assert_eq!(request.output, None);
    }

    #[test]
    fn given_missing_required_flags_when_validate_then_lists_all_in_order() {
        let args = create(&["--json", "-a", "x"]).unwrap();
        let err = args.validate().unwrap_err();

        match err {
            CliError::MissingArguments { flags } => assert_eq!(
                flags,
                vec!["--definition-file", "--duration-days", "--target-dev-hub"]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn given_empty_value_when_validate_then_counts_as_missing() {
        let args = create(&["-d", "d.json", "-a", "", "-t", "1", "-h", "hub"]).unwrap();
        assert!(matches!(
            args.validate(),
            Err(CliError::MissingArguments { flags }) if flags == vec!["--alias"]
        ));
    }

    #[test]
    fn given_help_flag_when_parse_then_display_help_without_required_args() {
        let err = create(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = auth(&["-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn given_unknown_flag_when_parse_then_error() {
        let err = create(&["--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[rstest]
    #[case("seven")]
    #[case("0")]
    #[case("1.5")]
    fn given_bad_duration_when_validate_then_invalid_argument(#[case] value: &str) {
        let args = create(&["-d", "d.json", "-a", "x", "-t", value, "-h", "hub", "--json"]).unwrap();

        match args.validate() {
            Err(CliError::InvalidArgument { flag, value: got, .. }) => {
                assert_eq!(flag, "--duration-days");
                assert_eq!(got, value);
            }
            other => panic!("unexpected result for {value}: {other:?}"),
        }
    }

    #[test]
    fn given_bad_duration_and_missing_flag_when_validate_then_missing_reported() {
        let args = create(&["-d", "d.json", "-t", "seven", "-h", "hub"]).unwrap();
        assert!(matches!(
            args.validate(),
            Err(CliError::MissingArguments { flags }) if flags == vec!["--alias"]
        ));
    }

    #[test]
    fn given_auth_flags_when_parse_then_request_built() {
        let args = auth(&["-o", "my-org", "-f", "auth/org.json", "--json"]).unwrap();
        assert_eq!(args.report_mode(), ReportMode::Json);
        assert_eq!(
            args.validate().unwrap(),
            OrgAuthRequest {
                org: "my-org".into(),
                output: PathBuf::from("auth/org.json"),
            }
        );
    }

    #[test]
    fn given_auth_without_args_when_validate_then_both_missing() {
        let args = auth(&[]).unwrap();
        assert!(matches!(
            args.validate(),
            Err(CliError::MissingArguments { flags }) if flags == vec!["--org", "--file"]
        ));
    }
}
