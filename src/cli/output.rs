//! Terminal output formatting and the error reporter
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Stdout is reserved for results and JSON error envelopes; everything
//! meant for humans goes to stderr.

use std::io::{self, Write};

use colored::Colorize;

use crate::domain::{ErrorEnvelope, ReportMode};

/// Stream a rendered report belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Render a failure for the given mode.
///
/// Plain: `error: <message>` then raw detail lines, for stderr.
/// Json: the single-line envelope, for stdout.
pub fn render_report(mode: ReportMode, envelope: &ErrorEnvelope) -> (Stream, String) {
    match mode {
        ReportMode::Json => (Stream::Stdout, envelope.to_json_line()),
        ReportMode::Plain => {
            let mut lines = envelope.to_plain_lines().into_iter();
            let mut text = match lines.next() {
                Some(message) => format!("{}: {}", "error".red().bold(), message),
                None => String::new(),
            };
            for line in lines {
                text.push('\n');
                text.push_str(&line);
            }
            (Stream::Stderr, text)
        }
    }
}

/// Emit exactly one report for a failure.
pub fn report(mode: ReportMode, envelope: &ErrorEnvelope) {
    report_to(mode, envelope, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Write the report to the stream chosen by `mode`.
///
/// A closed stream is ignored; the caller still exits with the failure code.
pub fn report_to(
    mode: ReportMode,
    envelope: &ErrorEnvelope,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) {
    let (stream, text) = render_report(mode, envelope);
    let out: &mut dyn Write = match stream {
        Stream::Stdout => stdout,
        Stream::Stderr => stderr,
    };
    let _ = writeln!(out, "{}", text).and_then(|_| out.flush());
}

/// Print success status (green checkmark) to stderr
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "✓".green(), msg);
}
