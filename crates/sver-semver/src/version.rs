#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A dot-separated [prerelease identifier](https://semver.org/#spec-item-9), such as `alpha` or
/// `11` in `1.0.0-alpha.11`.
///
/// The only way to get one is [`Prerelease::from_str`], which validates the identifier and
/// classifies it once:
///
/// > Identifiers consisting of only digits are compared numerically. Identifiers with letters or
/// > hyphens are compared lexically in ASCII sort order. Numeric identifiers always have lower
/// > precedence than non-numeric identifiers.
///
/// A digit-only identifier with a leading zero (e.g. `007`) is not a number in the grammar's
/// sense, so it is classified as alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prerelease(Identifier);

/// The derived `Ord` would not implement the precedence rules, see the impl on [`Prerelease`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Identifier {
    /// Decimal digits without a leading zero, kept as text so that values of any length compare
    /// by magnitude.
    Numeric(String),
    /// Any other identifier, compared by ASCII code point.
    Alphanumeric(String),
}

impl Prerelease {
    /// Returns the identifier as it appears in the version string.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Identifier::Numeric(digits) => digits,
            Identifier::Alphanumeric(identifier) => identifier,
        }
    }

    /// Whether the identifier compares by numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(self.0, Identifier::Numeric(_))
    }
}

impl FromStr for Prerelease {
    type Err = ErrorKind;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        validate_identifier(identifier, Section::Prerelease)?;
        let numeric = identifier.bytes().all(|byte| byte.is_ascii_digit())
            && (identifier == "0" || !identifier.starts_with('0'));
        if numeric {
            Ok(Self(Identifier::Numeric(identifier.to_string())))
        } else {
            Ok(Self(Identifier::Alphanumeric(identifier.to_string())))
        }
    }
}

impl Display for Prerelease {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prerelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            // Numeric identifiers have no leading zeros, so the longer one is the larger number.
            (Identifier::Numeric(n1), Identifier::Numeric(n2)) => {
                n1.len().cmp(&n2.len()).then_with(|| n1.cmp(n2))
            }
            (Identifier::Alphanumeric(s1), Identifier::Alphanumeric(s2)) => s1.cmp(s2),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
        }
    }
}

/// A semantic version such as `1.2.3`, `1.0.0-rc.1` or `1.0.0-beta.11+exp.sha.5114f85`.
///
/// `Eq` and `Hash` are structural over all fields, including build metadata. `Ord` orders by
/// precedence first and breaks ties on the `.`-joined build metadata, which keeps it consistent
/// with `Eq`; use [`Version::cmp_precedence`] for the ordering defined by the standard, which
/// ignores build metadata entirely.
///
/// Parse with [`Version::from_str`]:
///
/// ```rust
/// use std::str::FromStr;
/// use sver_semver::Version;
///
/// let version = Version::from_str("1.0.0-alpha+001").unwrap();
/// assert_eq!(version.to_string(), "1.0.0-alpha+001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<Prerelease>,
    build: Vec<String>,
}

impl Version {
    /// Constructor for a release version such as `1.2.3`, without prerelease or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Construct a version from its components, validating every identifier the same way the
    /// parser does.
    pub fn from_parts<P, B>(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: P,
        build: B,
    ) -> Result<Self, VersionParseError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        let prerelease = prerelease
            .into_iter()
            .map(|identifier| identifier.as_ref().to_string())
            .collect::<Vec<_>>();
        let build = build
            .into_iter()
            .map(|identifier| identifier.as_ref().to_string())
            .collect::<Vec<_>>();

        let parse_identifiers = || -> Result<Self, ErrorKind> {
            let prerelease = prerelease
                .iter()
                .map(|identifier| Prerelease::from_str(identifier))
                .collect::<Result<Vec<_>, _>>()?;
            for identifier in &build {
                validate_identifier(identifier, Section::Build)?;
            }
            Ok(Self {
                major,
                minor,
                patch,
                prerelease,
                build: build.clone(),
            })
        };

        parse_identifiers().map_err(|kind| VersionParseError {
            input: render_parts(major, minor, patch, &prerelease, &build),
            kind,
        })
    }

    /// Return a copy of this version with the given prerelease identifiers.
    ///
    /// Identifiers come from [`Prerelease::from_str`], so the result always renders to a string
    /// that parses back to an equal version.
    #[must_use]
    pub fn with_prerelease(self, prerelease: Vec<Prerelease>) -> Self {
        Self { prerelease, ..self }
    }

    /// The major version, `1` in `1.2.3`.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor version, `2` in `1.2.3`.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version, `3` in `1.2.3`.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The prerelease identifiers, `[alpha, 1]` in `1.0.0-alpha.1`.
    pub fn prerelease(&self) -> &[Prerelease] {
        &self.prerelease
    }

    /// The build metadata identifiers, `[exp, sha, 5114f85]` in `1.0.0+exp.sha.5114f85`.
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Whether this is a prerelease such as `1.0.0-rc.1`.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Whether the version carries build metadata such as `+20130313144700`.
    pub fn has_build(&self) -> bool {
        !self.build.is_empty()
    }

    /// The same version with the build metadata removed, i.e. the value precedence looks at.
    #[must_use]
    pub fn without_build(&self) -> Self {
        Self {
            build: Vec::new(),
            ..self.clone()
        }
    }

    /// Only the `major.minor.patch` part of the version.
    #[must_use]
    pub fn only_release(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }

    /// Compare two versions by [precedence](https://semver.org/#spec-item-11): release numbers
    /// first, then prerelease identifiers, ignoring build metadata.
    ///
    /// `1.0.0-alpha < 1.0.0-alpha.1 < 1.0.0-alpha.beta < 1.0.0-beta < 1.0.0-beta.2
    /// < 1.0.0-beta.11 < 1.0.0-rc.1 < 1.0.0`
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }

    fn parse(version: &str) -> Result<Self, ErrorKind> {
        if !version.is_ascii() {
            return Err(ErrorKind::NonAscii);
        }

        // Build metadata runs from the first `+` to the end, so any `-` after it is part of a
        // build identifier rather than a prerelease marker.
        let (version, build) = match version.split_once('+') {
            Some((version, build)) => (version, Some(build)),
            None => (version, None),
        };
        let (release, prerelease) = match version.split_once('-') {
            Some((release, prerelease)) => (release, Some(prerelease)),
            None => (version, None),
        };

        let components = release.split('.').collect::<Vec<_>>();
        let [major, minor, patch] = components[..] else {
            return Err(ErrorKind::ComponentCount {
                found: components.len(),
            });
        };
        let major = parse_number(major, Component::Major)?;
        let minor = parse_number(minor, Component::Minor)?;
        let patch = parse_number(patch, Component::Patch)?;

        let prerelease = prerelease
            .map(|prerelease| {
                prerelease
                    .split('.')
                    .map(Prerelease::from_str)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();
        let build = build
            .map(|build| {
                build
                    .split('.')
                    .map(|identifier| {
                        validate_identifier(identifier, Section::Build)?;
                        Ok(identifier.to_string())
                    })
                    .collect::<Result<Vec<_>, ErrorKind>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parses a version such as `1.2.3`, `1.0.0-alpha.1` or `1.0.0+20130313144700`.
    ///
    /// This is strict: no leading `v`, no surrounding whitespace, no leading zeros in the
    /// release numbers and no empty identifiers.
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        Self::parse(version).map_err(|kind| VersionParseError {
            input: version.to_string(),
            kind,
        })
    }
}

/// Shows the canonical form, which parses back to an equal version.
impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (i, identifier) in self.prerelease.iter().enumerate() {
            let separator = if i == 0 { '-' } else { '.' };
            write!(f, "{separator}{identifier}")?;
        }
        for (i, identifier) in self.build.iter().enumerate() {
            let separator = if i == 0 { '+' } else { '.' };
            write!(f, "{separator}{identifier}")?;
        }
        Ok(())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Precedence, then build metadata compared as the `.`-joined string.
    ///
    /// `1.0.0-rc.1+b < 1.0.0+a < 1.0.0+a.b < 1.0.0+b`
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| compare_build(&self.build, &other.build))
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Compare prerelease identifiers, given equal release numbers.
///
/// A release (no identifiers) outranks all of its prereleases. Otherwise the slice ordering is
/// exactly the one semver asks for: the first differing identifier decides, and if one list is a
/// prefix of the other, the shorter list comes first.
fn compare_prerelease(this: &[Prerelease], other: &[Prerelease]) -> Ordering {
    match (this.is_empty(), other.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => this.cmp(other),
    }
}

/// Build metadata is compared as one string, `a.b` vs. `a-c`, not identifier by identifier.
fn compare_build(this: &[String], other: &[String]) -> Ordering {
    if this.is_empty() && other.is_empty() {
        return Ordering::Equal;
    }
    this.join(".").cmp(&other.join("."))
}

/// Parse one of `major`, `minor` or `patch`.
fn parse_number(number: &str, component: Component) -> Result<u64, ErrorKind> {
    if number.is_empty() || !number.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ErrorKind::InvalidNumber {
            component,
            value: number.to_string(),
        });
    }
    if number.len() > 1 && number.starts_with('0') {
        return Err(ErrorKind::LeadingZero {
            component,
            value: number.to_string(),
        });
    }
    number.parse::<u64>().map_err(|_| ErrorKind::NumberTooLarge {
        component,
        value: number.to_string(),
    })
}

/// Identifiers must be non-empty and only contain `[0-9A-Za-z-]`.
fn validate_identifier(identifier: &str, section: Section) -> Result<(), ErrorKind> {
    if identifier.is_empty() {
        return Err(ErrorKind::EmptyIdentifier { section });
    }
    if !identifier
        .bytes()
        .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-')
    {
        return Err(ErrorKind::InvalidIdentifier {
            section,
            identifier: identifier.to_string(),
        });
    }
    Ok(())
}

/// Render unvalidated components for error messages.
fn render_parts(
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: &[String],
    build: &[String],
) -> String {
    let mut rendered = format!("{major}.{minor}.{patch}");
    if !prerelease.is_empty() {
        rendered.push('-');
        rendered.push_str(&prerelease.join("."));
    }
    if !build.is_empty() {
        rendered.push('+');
        rendered.push_str(&build.join("."));
    }
    rendered
}

/// One of the three release numbers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// `1` in `1.2.3`
    Major,
    /// `2` in `1.2.3`
    Minor,
    /// `3` in `1.2.3`
    Patch,
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => f.write_str("major"),
            Self::Minor => f.write_str("minor"),
            Self::Patch => f.write_str("patch"),
        }
    }
}

/// The identifier list an identifier error occurred in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    /// The identifiers after the `-`.
    Prerelease,
    /// The identifiers after the `+`.
    Build,
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prerelease => f.write_str("prerelease"),
            Self::Build => f.write_str("build metadata"),
        }
    }
}

/// The input is not a syntactically valid semantic version.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("`{input}` is not a valid semantic version: {kind}")]
pub struct VersionParseError {
    input: String,
    kind: ErrorKind,
}

impl VersionParseError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// The reason a version or identifier was rejected.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    /// The input contains a non-ASCII character.
    #[error("versions may only contain ASCII characters")]
    NonAscii,
    /// The release part does not have exactly three dot-separated numbers.
    #[error("expected `MAJOR.MINOR.PATCH`, but found {found} dot-separated component(s)")]
    ComponentCount {
        /// The number of components found before the prerelease or build metadata.
        found: usize,
    },
    /// A release number is empty or contains something other than digits.
    #[error("the {component} version must be a non-negative integer, found `{value}`")]
    InvalidNumber {
        /// The offending release number.
        component: Component,
        /// The text that failed to parse.
        value: String,
    },
    /// A release number has a redundant leading zero, e.g. `01`.
    #[error("the {component} version must not have leading zeros, found `{value}`")]
    LeadingZero {
        /// The offending release number.
        component: Component,
        /// The text that failed to parse.
        value: String,
    },
    /// A release number does not fit into 64 bits.
    #[error("the {component} version `{value}` is too large")]
    NumberTooLarge {
        /// The offending release number.
        component: Component,
        /// The text that failed to parse.
        value: String,
    },
    /// An identifier is empty, e.g. in `1.0.0-` or `1.0.0-alpha..1`.
    #[error("{section} identifiers must not be empty")]
    EmptyIdentifier {
        /// Where the empty identifier is.
        section: Section,
    },
    /// An identifier contains a character outside of `[0-9A-Za-z-]`.
    #[error(
        "{section} identifier `{identifier}` may only contain ASCII alphanumerics and hyphens"
    )]
    InvalidIdentifier {
        /// Where the invalid identifier is.
        section: Section,
        /// The invalid identifier.
        identifier: String,
    },
}
