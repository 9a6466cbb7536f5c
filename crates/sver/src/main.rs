use std::env;
use std::process::ExitCode;

use anstream::eprintln;
use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;

use sver_cli::{Cli, ColorChoice, Commands, CompareArgs, GlobalArgs, ParseArgs};
use sver_static::EnvVars;

use crate::commands::ExitStatus;
use crate::printer::Printer;

mod commands;
mod logging;
mod printer;

/// Resolve the color choice from the command line, falling back to `NO_COLOR` and
/// `FORCE_COLOR`.
fn color_choice(args: &GlobalArgs) -> anstream::ColorChoice {
    if args.no_color {
        return anstream::ColorChoice::Never;
    }
    if let Some(color) = args.color {
        return color.into();
    }
    if env::var_os(EnvVars::NO_COLOR).is_some_and(|value| !value.is_empty()) {
        return ColorChoice::Never.into();
    }
    if env::var_os(EnvVars::FORCE_COLOR).is_some_and(|value| !value.is_empty()) {
        return ColorChoice::Always.into();
    }
    ColorChoice::Auto.into()
}

fn run(cli: Cli) -> Result<ExitStatus> {
    let globals = cli.global_args;

    // Set the global color choice before the logger reads it.
    anstream::ColorChoice::write_global(color_choice(&globals));

    logging::setup_logging(logging::Level::from_verbosity(globals.verbose))?;

    let printer = if globals.quiet {
        Printer::Quiet
    } else {
        Printer::Default
    };
    debug!("sver {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Parse(ParseArgs { input }) => {
            commands::parse(&input, globals.output_format, printer)
        }
        Commands::Compare(CompareArgs {
            left,
            operator,
            right,
            mode,
            invert,
        }) => commands::compare(
            &left,
            operator,
            &right,
            mode.into(),
            invert,
            globals.output_format,
            printer,
        ),
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests are not errors.
            let status = if err.use_stderr() {
                ExitStatus::Error
            } else {
                ExitStatus::Success
            };
            if let Err(err) = err.print() {
                eprintln!("{}: {err}", "error".red().bold());
            }
            return status.into();
        }
    };

    match run(cli) {
        Ok(code) => code.into(),
        Err(err) => {
            let mut causes = err.chain();
            if let Some(cause) = causes.next() {
                eprintln!("{}: {}", "error".red().bold(), cause);
            }
            for err in causes {
                eprintln!("  {}: {}", "Caused by".red().bold(), err);
            }
            ExitStatus::Error.into()
        }
    }
}
