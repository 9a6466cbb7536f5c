//! A library for [Semantic Versioning 2.0.0](https://semver.org) version numbers, their
//! precedence, and the comparison modes built on top of it.
//!
//! ```rust
//! use std::str::FromStr;
//! use sver_semver::{compare, ComparisonMode, Operator, Version};
//!
//! let left = Version::from_str("1.0.0-alpha.1").unwrap();
//! let right = Version::from_str("1.0.0-alpha.beta").unwrap();
//! assert!(compare(&left, &right, Operator::LessThan, ComparisonMode::Precedence, false));
//! ```
//!
//! Semantic versioning has a handful of rules that are easy to get wrong:
//!
//! * Build metadata (`+build.5`) is part of a version's identity but not of its precedence:
//!   `1.0.0+a` and `1.0.0+b` are different versions that neither precede nor follow each other.
//!   [`Version`]'s `Eq` is structural, while [`Version::cmp_precedence`] ignores build metadata.
//! * A release has higher precedence than any of its prereleases, so `1.0.0-rc.1 < 1.0.0`.
//! * Prerelease identifiers made only of digits compare numerically (`beta.2 < beta.11`), all
//!   other identifiers compare lexically in ASCII order, and numeric identifiers always sort
//!   before alphanumeric ones (`1.0.0-2 < 1.0.0-alpha`).
//! * When one prerelease is a prefix of the other, the shorter one comes first
//!   (`1.0.0-alpha < 1.0.0-alpha.1`).
//!
//! Which of these rules apply to a comparison is selected with a [`ComparisonMode`].
#![deny(missing_docs)]

pub use {
    compare::{ComparisonMode, ComparisonModeParseError, Operator, OperatorParseError, compare},
    version::{Component, ErrorKind, Prerelease, Section, Version, VersionParseError},
};

mod compare;
mod version;
