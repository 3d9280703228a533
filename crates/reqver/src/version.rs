//! The parsed version record

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::comparator::Precedence;
use crate::error::InvalidVersionError;
use crate::version_parser::parse_version;

/// A single dot-separated pre-release identifier.
///
/// Numeric identifiers compare numerically, alphanumeric ones compare by
/// ASCII byte order, and a numeric identifier always sorts before an
/// alphanumeric one. The derived ordering relies on the variant order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreId {
    /// An identifier made only of digits, without a leading zero
    Numeric(u64),
    /// Any other identifier
    AlphaNumeric(String),
}

impl fmt::Display for PreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreId::Numeric(n) => write!(f, "{}", n),
            PreId::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// A semantic version: `major.minor.patch[-pre][+build]`.
///
/// Build metadata is kept for display only. Equality, hashing and ordering
/// ignore it, so `1.2.3+a == 1.2.3+b`.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Vec<PreId>,
    build: Option<String>,
}

impl Version {
    /// A release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: None,
        }
    }

    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, InvalidVersionError> {
        match parse_version(input, false) {
            Some(parts) => Ok(Version {
                major: parts.major,
                minor: parts.minor,
                // Strict mode always yields a patch.
                patch: parts.patch.unwrap_or_default(),
                pre: parts.pre,
                build: parts.build,
            }),
            None => Err(InvalidVersionError::new(input)),
        }
    }

    /// Parse a version string, panicking on invalid input.
    ///
    /// # Panics
    ///
    /// Panics with the [`InvalidVersionError`] message if `input` is not a valid version.
    pub fn must_parse(input: &str) -> Self {
        match Self::parse(input) {
            Ok(version) => version,
            Err(err) => panic!("{}", err),
        }
    }

    /// Check if a version string is valid
    pub fn is_valid(input: &str) -> bool {
        parse_version(input, false).is_some()
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers, empty for a release
    pub fn pre(&self) -> &[PreId] {
        &self.pre
    }

    /// Build metadata without the leading `+`
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Whether this is a pre-release version
    pub fn is_pre(&self) -> bool {
        !self.pre.is_empty()
    }

    pub(crate) fn precedence(&self) -> Precedence<'_> {
        Precedence::new(self.major, self.minor, self.patch, &self.pre)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        write_pre(f, &self.pre)?;
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

pub(crate) fn write_pre(f: &mut fmt::Formatter<'_>, pre: &[PreId]) -> fmt::Result {
    for (i, id) in pre.iter().enumerate() {
        f.write_str(if i == 0 { "-" } else { "." })?;
        write!(f, "{}", id)?;
    }
    Ok(())
}

impl FromStr for Version {
    type Err = InvalidVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = InvalidVersionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}
