/// Declares all environment variables used throughout `sver` and its crates.
pub struct EnvVars;

impl EnvVars {
    /// Equivalent to the `--mode` command-line argument. If set, `sver compare` uses this
    /// comparison mode (`traditional`, `precedence`, `strict-equality` or `strict`) unless
    /// `--mode` is given.
    pub const SVER_COMPARISON_MODE: &'static str = "SVER_COMPARISON_MODE";

    /// Equivalent to the `--output-format` command-line argument, `text` or `json`.
    pub const SVER_OUTPUT_FORMAT: &'static str = "SVER_OUTPUT_FORMAT";

    /// If set, `sver` will use this value as the log level for its `--verbose` output. Accepts
    /// any filter compatible with the `tracing_subscriber` crate.
    ///
    /// For example, `RUST_LOG=sver=debug` is the equivalent of adding `--verbose` to the command
    /// line.
    ///
    /// See the [tracing documentation](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#example-syntax)
    /// for more.
    pub const RUST_LOG: &'static str = "RUST_LOG";

    /// Disables colored output (takes precedence over `FORCE_COLOR`).
    ///
    /// See [no-color.org](https://no-color.org).
    pub const NO_COLOR: &'static str = "NO_COLOR";

    /// Forces colored output regardless of terminal support.
    ///
    /// See [force-color.org](https://force-color.org).
    pub const FORCE_COLOR: &'static str = "FORCE_COLOR";
}
