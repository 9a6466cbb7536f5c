use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::Version;

/// One of `==` `!=` `<` `<=` `>` `>=`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `==`, the versions are equal after normalization
    Equal,
    /// `!=`
    NotEqual,
    /// `<`, the left version is strictly older
    LessThan,
    /// `<=`, the left version is at least as old
    LessThanEqual,
    /// `>`, the left version is strictly newer
    GreaterThan,
    /// `>=`, the left version is at least as new
    GreaterThanEqual,
}

impl Operator {
    /// Whether this is `==` or `!=`, which compare structurally instead of by precedence.
    pub fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    /// Evaluate the operator on two already normalized versions.
    ///
    /// The ordering operators are all derived from the one "precedes" relation, `left < right`
    /// in [`Version`]'s `Ord`. Mode normalization decides whether that ordering still sees any
    /// build metadata.
    pub fn evaluate(self, left: &Version, right: &Version) -> bool {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::LessThan => precedes(left, right),
            Self::LessThanEqual => !precedes(right, left),
            Self::GreaterThan => precedes(right, left),
            Self::GreaterThanEqual => !precedes(left, right),
        }
    }
}

fn precedes(left: &Version, right: &Version) -> bool {
    left < right
}

impl FromStr for Operator {
    type Err = OperatorParseError;

    /// Accepts the symbols as well as the shell friendly `eq` `ne` `lt` `le` `gt` `ge`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let operator = match s {
            "==" | "eq" => Self::Equal,
            "!=" | "ne" => Self::NotEqual,
            "<" | "lt" => Self::LessThan,
            "<=" | "le" => Self::LessThanEqual,
            ">" | "gt" => Self::GreaterThan,
            ">=" | "ge" => Self::GreaterThanEqual,
            other => {
                return Err(OperatorParseError {
                    got: other.to_string(),
                });
            }
        };
        Ok(operator)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
        };

        write!(f, "{operator}")
    }
}

/// An invalid comparison operator was given.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("No such comparison operator `{got}`, must be one of `==` `!=` `<` `<=` `>` `>=`")]
pub struct OperatorParseError {
    got: String,
}

/// Which parts of a version take part in a comparison.
///
/// | Mode              | `==` `!=` look at            | `<` `<=` `>` `>=` look at     |
/// |-------------------|------------------------------|-------------------------------|
/// | `traditional`     | release                      | release                       |
/// | `precedence`      | release, prerelease          | release, prerelease           |
/// | `strict-equality` | release, prerelease, build   | release, prerelease           |
/// | `strict`          | release, prerelease, build   | release, prerelease, build    |
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ComparisonMode {
    /// Only `major.minor.patch`, so `1.0.0-alpha == 1.0.0-beta`.
    Traditional,
    /// Semver precedence: build metadata is ignored everywhere.
    #[default]
    Precedence,
    /// Equality is structural and sees build metadata, ordering is by precedence.
    StrictEquality,
    /// Build metadata takes part in every operator, as a final tie-break for the ordering ones.
    Strict,
}

impl ComparisonMode {
    /// Return the view of `version` that `operator` compares under this mode.
    ///
    /// The version itself is never modified, stripped views are new values.
    pub fn normalize(self, version: &Version, operator: Operator) -> Cow<'_, Version> {
        let keep_build = match self {
            Self::Traditional => {
                return if version.is_prerelease() || version.has_build() {
                    Cow::Owned(version.only_release())
                } else {
                    Cow::Borrowed(version)
                };
            }
            Self::Precedence => false,
            Self::StrictEquality => operator.is_equality(),
            Self::Strict => true,
        };
        if keep_build || !version.has_build() {
            Cow::Borrowed(version)
        } else {
            Cow::Owned(version.without_build())
        }
    }
}

impl FromStr for ComparisonMode {
    type Err = ComparisonModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traditional" => Ok(Self::Traditional),
            "precedence" => Ok(Self::Precedence),
            "strict-equality" => Ok(Self::StrictEquality),
            "strict" => Ok(Self::Strict),
            other => Err(ComparisonModeParseError {
                got: other.to_string(),
            }),
        }
    }
}

impl Display for ComparisonMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Traditional => f.write_str("traditional"),
            Self::Precedence => f.write_str("precedence"),
            Self::StrictEquality => f.write_str("strict-equality"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// An unknown comparison mode was given.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error(
    "No such comparison mode `{got}`, must be one of `traditional` `precedence` `strict-equality` `strict`"
)]
pub struct ComparisonModeParseError {
    got: String,
}

/// Compare two versions with `operator` after normalizing both according to `mode`, negating
/// the result if `invert` is set.
///
/// ```rust
/// use std::str::FromStr;
/// use sver_semver::{compare, ComparisonMode, Operator, Version};
///
/// let a = Version::from_str("1.0.0+a").unwrap();
/// let b = Version::from_str("1.0.0+b").unwrap();
/// assert!(compare(&a, &b, Operator::Equal, ComparisonMode::Precedence, false));
/// assert!(!compare(&a, &b, Operator::Equal, ComparisonMode::StrictEquality, false));
/// ```
pub fn compare(
    left: &Version,
    right: &Version,
    operator: Operator,
    mode: ComparisonMode,
    invert: bool,
) -> bool {
    let normalized_left = mode.normalize(left, operator);
    let normalized_right = mode.normalize(right, operator);
    let result = operator.evaluate(&normalized_left, &normalized_right);

    #[cfg(feature = "tracing")]
    trace!(
        "{normalized_left} {operator} {normalized_right} is {result} in {mode} mode{}",
        if invert { " (inverted)" } else { "" }
    );

    if invert { !result } else { result }
}
