use std::fmt::Write;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, instrument};

use sver_cli::OutputFormat;
use sver_semver::{Prerelease, Version};

use crate::commands::{ExitStatus, report_invalid_version};
use crate::printer::Printer;

/// The components of a parsed version, as printed by `sver parse`.
#[derive(Debug, Serialize)]
struct ParsedVersion {
    version: String,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<String>,
    build: Vec<String>,
}

impl From<&Version> for ParsedVersion {
    fn from(version: &Version) -> Self {
        Self {
            version: version.to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version
                .prerelease()
                .iter()
                .map(Prerelease::to_string)
                .collect(),
            build: version.build().to_vec(),
        }
    }
}

impl ParsedVersion {
    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let mut output = String::new();
                writeln!(output, "version: {}", self.version)?;
                writeln!(output, "major: {}", self.major)?;
                writeln!(output, "minor: {}", self.minor)?;
                writeln!(output, "patch: {}", self.patch)?;
                if !self.prerelease.is_empty() {
                    writeln!(output, "prerelease: {}", self.prerelease.join("."))?;
                }
                if !self.build.is_empty() {
                    writeln!(output, "build: {}", self.build.join("."))?;
                }
                Ok(output)
            }
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(self)?)),
        }
    }
}

/// Parse a version and print its canonical form and components.
#[instrument(skip(printer))]
pub(crate) fn parse(version: &str, format: OutputFormat, printer: Printer) -> Result<ExitStatus> {
    let version = match Version::from_str(version) {
        Ok(version) => version,
        Err(err) => {
            report_invalid_version(&err, printer)?;
            return Ok(ExitStatus::Failure);
        }
    };
    debug!("Parsed `{version}`");

    let output = ParsedVersion::from(&version).render(format)?;
    write!(printer.stdout(), "{output}")?;

    Ok(ExitStatus::Success)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use insta::assert_snapshot;

    use sver_cli::OutputFormat;
    use sver_semver::Version;

    use super::ParsedVersion;

    fn render(version: &str, format: OutputFormat) -> String {
        let version = Version::from_str(version).unwrap();
        ParsedVersion::from(&version).render(format).unwrap()
    }

    #[test]
    fn text() {
        assert_snapshot!(render("1.0.0-rc.1+build.5", OutputFormat::Text), @r"
        version: 1.0.0-rc.1+build.5
        major: 1
        minor: 0
        patch: 0
        prerelease: rc.1
        build: build.5
        ");
        assert_snapshot!(render("2.10.3", OutputFormat::Text), @r"
        version: 2.10.3
        major: 2
        minor: 10
        patch: 3
        ");
    }

    #[test]
    fn json() {
        assert_snapshot!(render("1.0.0-rc.1+build.5", OutputFormat::Json), @r#"
        {
          "version": "1.0.0-rc.1+build.5",
          "major": 1,
          "minor": 0,
          "patch": 0,
          "prerelease": [
            "rc",
            "1"
          ],
          "build": [
            "build",
            "5"
          ]
        }
        "#);
        assert_snapshot!(render("0.1.0", OutputFormat::Json), @r#"
        {
          "version": "0.1.0",
          "major": 0,
          "minor": 1,
          "patch": 0,
          "prerelease": [],
          "build": []
        }
        "#);
    }
}
