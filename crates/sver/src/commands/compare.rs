use std::fmt::Write;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, instrument};

use sver_cli::OutputFormat;
use sver_semver::{ComparisonMode, Operator, Version};

use crate::commands::{ExitStatus, report_invalid_version};
use crate::printer::Printer;

/// The outcome of `sver compare`, with both versions in canonical form.
#[derive(Debug, Serialize)]
struct Comparison {
    left: String,
    operator: String,
    right: String,
    mode: String,
    invert: bool,
    result: bool,
}

impl Comparison {
    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(format!("{}\n", self.result)),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(self)?)),
        }
    }
}

/// Compare two versions, exiting with success if the comparison holds.
#[instrument(skip(printer))]
pub(crate) fn compare(
    left: &str,
    operator: Operator,
    right: &str,
    mode: ComparisonMode,
    invert: bool,
    format: OutputFormat,
    printer: Printer,
) -> Result<ExitStatus> {
    let (left, right) = match (Version::from_str(left), Version::from_str(right)) {
        (Ok(left), Ok(right)) => (left, right),
        (Err(err), _) | (_, Err(err)) => {
            report_invalid_version(&err, printer)?;
            return Ok(ExitStatus::Failure);
        }
    };

    let result = sver_semver::compare(&left, &right, operator, mode, invert);
    debug!("`{left} {operator} {right}` is {result} in {mode} mode");

    let comparison = Comparison {
        left: left.to_string(),
        operator: operator.to_string(),
        right: right.to_string(),
        mode: mode.to_string(),
        invert,
        result,
    };
    write!(printer.stdout(), "{}", comparison.render(format)?)?;

    if result {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use sver_cli::OutputFormat;

    use super::Comparison;

    #[test]
    fn render() {
        let comparison = Comparison {
            left: "1.0.0+a".to_string(),
            operator: "==".to_string(),
            right: "1.0.0+b".to_string(),
            mode: "strict-equality".to_string(),
            invert: false,
            result: false,
        };
        assert_snapshot!(comparison.render(OutputFormat::Text).unwrap(), @"false");
        assert_snapshot!(comparison.render(OutputFormat::Json).unwrap(), @r#"
        {
          "left": "1.0.0+a",
          "operator": "==",
          "right": "1.0.0+b",
          "mode": "strict-equality",
          "invert": false,
          "result": false
        }
        "#);
    }
}
