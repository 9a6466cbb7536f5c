use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Args, Parser, Subcommand};

use sver_semver::{ComparisonMode, Operator};
use sver_static::EnvVars;

// Configures Clap v3-style help menu colors
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "sver", author, version)]
#[command(about = "Parse and compare Semantic Versioning 2.0.0 version numbers.")]
#[command(propagate_version = true)]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Global options", next_display_order = 1000)]
pub struct GlobalArgs {
    /// Do not print any output.
    ///
    /// The exit status still reports the result.
    #[arg(global = true, long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use verbose output.
    ///
    /// Repeat (`-vv`) to include timestamps, targets and spans. You can configure fine-grained
    /// logging using the `RUST_LOG` environment variable.
    /// (<https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives>)
    #[arg(global = true, action = clap::ArgAction::Count, long, short, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable colors.
    #[arg(global = true, long, hide = true, conflicts_with = "color")]
    pub no_color: bool,

    /// Control colors in output.
    #[arg(
        global = true,
        long,
        value_enum,
        conflicts_with = "no_color",
        value_name = "COLOR_CHOICE"
    )]
    pub color: Option<ColorChoice>,

    /// The format in which to print results.
    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = OutputFormat::default(),
        env = EnvVars::SVER_OUTPUT_FORMAT
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Enables colored output only when the output is going to a terminal or TTY with support.
    Auto,

    /// Enables colored output regardless of the detected environment.
    Always,

    /// Disables colored output.
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(value: ColorChoice) -> Self {
        match value {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Display the result as plain text.
    #[default]
    Text,
    /// Display the result as JSON.
    Json,
}

/// Which parts of the versions take part in a comparison.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Only compare `major.minor.patch`; prerelease and build metadata are ignored.
    Traditional,
    /// Compare by semver precedence; build metadata is ignored.
    #[default]
    Precedence,
    /// Like `precedence`, but `==` and `!=` also compare build metadata.
    StrictEquality,
    /// Build metadata takes part in every comparison, as a plain string tie-break.
    Strict,
}

impl From<Mode> for ComparisonMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Traditional => Self::Traditional,
            Mode::Precedence => Self::Precedence,
            Mode::StrictEquality => Self::StrictEquality,
            Mode::Strict => Self::Strict,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a version and print its canonical form or its components.
    Parse(ParseArgs),
    /// Compare two versions.
    ///
    /// Exits with status 0 if the comparison holds and 1 if it does not.
    Compare(CompareArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// The version to parse, e.g. `1.0.0-rc.1+build.5`.
    #[arg(value_name = "VERSION")]
    pub input: String,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// The version on the left-hand side.
    pub left: String,

    /// The comparison operator: `==`, `!=`, `<`, `<=`, `>`, `>=`, or `eq`, `ne`, `lt`, `le`,
    /// `gt`, `ge`.
    pub operator: Operator,

    /// The version on the right-hand side.
    pub right: String,

    /// Which parts of the versions take part in the comparison.
    #[arg(
        long,
        short,
        value_enum,
        default_value_t = Mode::default(),
        env = EnvVars::SVER_COMPARISON_MODE
    )]
    pub mode: Mode,

    /// Negate the result of the comparison.
    #[arg(long)]
    pub invert: bool,
}

#[cfg(test)]
mod tests;
