use std::fmt::Write;
use std::process::ExitCode;

use owo_colors::OwoColorize;

use sver_semver::VersionParseError;

use crate::printer::Printer;

pub(crate) use compare::compare;
pub(crate) use parse::parse;

mod compare;
mod parse;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ExitStatus {
    /// The command succeeded, or the comparison holds.
    Success,

    /// The comparison does not hold, or a version could not be parsed.
    Failure,

    /// The command failed with an unexpected error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// Report a version that failed to parse, the user input failure of every command.
fn report_invalid_version(err: &VersionParseError, printer: Printer) -> std::fmt::Result {
    tracing::debug!("Rejected `{}`: {:?}", err.input(), err.kind());
    writeln!(printer.stderr(), "{}: {err}", "error".red().bold())
}
