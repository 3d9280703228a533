//! Version string parsing
//!
//! Grammar:
//!
//! ```text
//! version    := core ("-" pre)? ("+" build)?
//! core       := digits "." digits "." digits
//! pre        := identifier ("." identifier)*
//! build      := identifier ("." identifier)*
//! identifier := [0-9A-Za-z-]+
//! digits     := "0" | [1-9][0-9]*
//! ```
//!
//! In approximate mode (operands of `~>`) the patch segment may be left out
//! entirely, e.g. `2.1` or `2.1-beta`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::version::PreId;

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();
}

/// The validated pieces of a version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VersionParts {
    pub major: u64,
    pub minor: u64,
    /// `None` only when parsed in approximate mode without a patch segment
    pub patch: Option<u64>,
    pub pre: Vec<PreId>,
    pub build: Option<String>,
}

/// Parse `input` into its parts, or `None` if it does not follow the grammar.
pub(crate) fn parse_version(input: &str, approximate: bool) -> Option<VersionParts> {
    let (version_with_pre, build) = split_once(input, '+');
    let (core, pre) = split_once(version_with_pre, '-');

    let mut segments = core.split('.');
    let major = require_digits(segments.next())?;
    let minor = require_digits(segments.next())?;
    let patch = match segments.next() {
        None if approximate => None,
        segment => Some(require_digits(segment)?),
    };
    if segments.next().is_some() {
        return None;
    }

    let pre = match pre {
        Some(pre) => dot_separated(pre)?
            .into_iter()
            .map(pre_identifier)
            .collect::<Option<Vec<_>>>()?,
        None => Vec::new(),
    };

    let build = match build {
        Some(build) => {
            dot_separated(build)?;
            Some(build.to_string())
        }
        None => None,
    };

    Some(VersionParts {
        major,
        minor,
        patch,
        pre,
        build,
    })
}

fn split_once(input: &str, separator: char) -> (&str, Option<&str>) {
    match input.split_once(separator) {
        Some((head, tail)) => (head, Some(tail)),
        None => (input, None),
    }
}

/// `0` or a digit run without a leading zero
fn require_digits(segment: Option<&str>) -> Option<u64> {
    let segment = segment?;
    if has_leading_zero(segment) {
        return None;
    }
    parse_digits(segment)
}

fn parse_digits(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn has_leading_zero(segment: &str) -> bool {
    segment.len() > 1 && segment.starts_with('0')
}

fn dot_separated(input: &str) -> Option<Vec<&str>> {
    let parts: Vec<&str> = input.split('.').collect();
    if parts.iter().all(|part| IDENTIFIER_RE.is_match(part)) {
        Some(parts)
    } else {
        None
    }
}

/// Digit-only identifiers become numeric unless they carry a leading zero,
/// in which case they stay alphanumeric. Numeric values beyond `u64` are rejected.
fn pre_identifier(part: &str) -> Option<PreId> {
    if has_leading_zero(part) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Some(PreId::AlphaNumeric(part.to_string()));
    }
    parse_digits(part).map(PreId::Numeric)
}
