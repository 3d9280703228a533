//! Version comparison utilities

use std::cmp::Ordering;

use crate::requirement::Operator;
use crate::version::{PreId, Version};

/// The fields of a version that take part in ordering.
///
/// Versions, requirement bounds and matchables all compare through this
/// view, so build metadata never influences a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Precedence<'a> {
    major: u64,
    minor: u64,
    patch: u64,
    pre: &'a [PreId],
}

impl<'a> Precedence<'a> {
    pub(crate) fn new(major: u64, minor: u64, patch: u64, pre: &'a [PreId]) -> Self {
        Precedence {
            major,
            minor,
            patch,
            pre,
        }
    }
}

impl Ord for Precedence<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                // A release outranks any of its pre-releases
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(other.pre),
            })
    }
}

impl PartialOrd for Precedence<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparator for comparing versions
pub struct Comparator;

impl Comparator {
    /// Three-way comparison, ignoring build metadata
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        version1.precedence().cmp(&version2.precedence())
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator.
    ///
    /// This is a plain ordering check: `~>` is evaluated as `>=` here since a
    /// bare version carries no notion of a partial operand. Pre-release
    /// exclusion only applies when matching a [`Requirement`](crate::Requirement).
    pub fn compare_with(version1: &Version, operator: Operator, version2: &Version) -> bool {
        let ordering = Self::compare(version1, version2);
        match operator {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual | Operator::Pessimistic => ordering != Ordering::Less,
        }
    }
}
