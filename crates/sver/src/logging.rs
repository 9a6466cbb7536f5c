use anstream::ColorChoice;
use anyhow::Context;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use sver_logging::SverFormat;
use sver_static::EnvVars;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    /// Suppress all tracing output by default (overridable by `RUST_LOG`).
    #[default]
    Default,
    /// Show debug messages by default (overridable by `RUST_LOG`).
    Verbose,
    /// Show trace messages, including every comparison the core evaluates, along with
    /// timestamps, targets and spans (overridable by `RUST_LOG`).
    ExtraVerbose,
}

impl Level {
    /// `-v` enables debug messages, `-vv` and more enable trace messages.
    pub(crate) fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => Self::Default,
            1 => Self::Verbose,
            _ => Self::ExtraVerbose,
        }
    }

    /// The filter applied when `RUST_LOG` is not set.
    fn default_directive(self) -> anyhow::Result<Directive> {
        match self {
            // Show nothing, but allow `RUST_LOG` to override.
            Self::Default => Ok(LevelFilter::OFF.into()),
            // The `sver` target prefix also covers `sver_semver`.
            Self::Verbose => Ok("sver=debug".parse()?),
            Self::ExtraVerbose => Ok("sver=trace".parse()?),
        }
    }
}

/// Configure `tracing` based on the given [`Level`], taking into account the `RUST_LOG` environment
/// variable.
///
/// The [`Level`] is used to dictate the default filters (which can be overridden by the `RUST_LOG`
/// environment variable) along with the formatting of the output. For example,
/// [`Level::ExtraVerbose`] includes targets and timestamps, along with all `sver=trace` messages
/// by default.
pub(crate) fn setup_logging(level: Level) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.default_directive()?)
        .with_env_var(EnvVars::RUST_LOG)
        .from_env()
        .context("Invalid RUST_LOG directives")?;

    let format = match level {
        Level::Default | Level::Verbose => SverFormat::default(),
        Level::ExtraVerbose => SverFormat::detailed(),
    };
    let ansi = match anstream::Stderr::choice(&std::io::stderr()) {
        ColorChoice::Always | ColorChoice::AlwaysAnsi => true,
        ColorChoice::Never | ColorChoice::Auto => false,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_filter(filter),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
