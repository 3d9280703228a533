//! Semver facade providing high-level version operations
//!
//! Every call accepts either parsed values or raw strings, see [`AsVersion`]
//! and [`AsRequirement`].

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::error::{Error, InvalidRequirementError, InvalidVersionError};
use crate::{Comparator, MatchOptions, Requirement, Version};

/// Anything that can be viewed as a [`Version`], parsing if needed
pub trait AsVersion {
    fn as_version(&self) -> Result<Cow<'_, Version>, InvalidVersionError>;
}

impl AsVersion for Version {
    fn as_version(&self) -> Result<Cow<'_, Version>, InvalidVersionError> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsVersion for str {
    fn as_version(&self) -> Result<Cow<'_, Version>, InvalidVersionError> {
        Version::parse(self).map(Cow::Owned)
    }
}

impl AsVersion for String {
    fn as_version(&self) -> Result<Cow<'_, Version>, InvalidVersionError> {
        self.as_str().as_version()
    }
}

impl<T: AsVersion + ?Sized> AsVersion for &T {
    fn as_version(&self) -> Result<Cow<'_, Version>, InvalidVersionError> {
        (**self).as_version()
    }
}

/// Anything that can be viewed as a [`Requirement`], parsing if needed
pub trait AsRequirement {
    fn as_requirement(&self) -> Result<Cow<'_, Requirement>, InvalidRequirementError>;
}

impl AsRequirement for Requirement {
    fn as_requirement(&self) -> Result<Cow<'_, Requirement>, InvalidRequirementError> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsRequirement for str {
    fn as_requirement(&self) -> Result<Cow<'_, Requirement>, InvalidRequirementError> {
        Requirement::parse(self).map(Cow::Owned)
    }
}

impl AsRequirement for String {
    fn as_requirement(&self) -> Result<Cow<'_, Requirement>, InvalidRequirementError> {
        self.as_str().as_requirement()
    }
}

impl<T: AsRequirement + ?Sized> AsRequirement for &T {
    fn as_requirement(&self) -> Result<Cow<'_, Requirement>, InvalidRequirementError> {
        (**self).as_requirement()
    }
}

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Parse a version string
    pub fn parse(version: &str) -> Result<Version, InvalidVersionError> {
        Version::parse(version)
    }

    /// Parse a requirement string
    pub fn parse_requirement(requirement: &str) -> Result<Requirement, InvalidRequirementError> {
        Requirement::parse(requirement)
    }

    /// Returns the requirement unchanged; parsing already yields the matchable form.
    pub fn compile_requirement(requirement: Requirement) -> Requirement {
        requirement.compile()
    }

    /// Three-way comparison of two versions, ignoring build metadata
    pub fn compare<A: AsVersion, B: AsVersion>(version1: A, version2: B) -> Result<Ordering, Error> {
        let version1 = version1.as_version()?;
        let version2 = version2.as_version()?;
        Ok(Comparator::compare(&version1, &version2))
    }

    /// Check if a version satisfies a requirement, allowing pre-releases
    pub fn matches<V: AsVersion, R: AsRequirement>(version: V, requirement: R) -> Result<bool, Error> {
        Self::matches_with(version, requirement, MatchOptions::default())
    }

    /// Check if a version satisfies a requirement
    pub fn matches_with<V: AsVersion, R: AsRequirement>(
        version: V,
        requirement: R,
        options: MatchOptions,
    ) -> Result<bool, Error> {
        let version = version.as_version()?;
        let requirement = requirement.as_requirement()?;
        Ok(requirement.matches_with(&version, options))
    }

    /// Return all versions that satisfy the requirement, in input order
    pub fn satisfied_by<V: AsVersion, R: AsRequirement>(
        versions: &[V],
        requirement: R,
        options: MatchOptions,
    ) -> Result<Vec<Version>, Error> {
        let requirement = requirement.as_requirement()?;
        let mut satisfied = Vec::new();
        for version in versions {
            let version = version.as_version()?;
            if requirement.matches_with(&version, options) {
                satisfied.push(version.into_owned());
            }
        }
        Ok(satisfied)
    }

    /// Sort versions in ascending order
    pub fn sort<V: AsVersion>(versions: &[V]) -> Result<Vec<Version>, Error> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort<V: AsVersion>(versions: &[V]) -> Result<Vec<Version>, Error> {
        Self::usort(versions, false)
    }

    fn usort<V: AsVersion>(versions: &[V], ascending: bool) -> Result<Vec<Version>, Error> {
        let mut parsed = versions
            .iter()
            .map(|v| v.as_version().map(Cow::into_owned))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable, so versions differing only in build metadata keep input order
        parsed.sort_by(|a, b| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        Ok(parsed)
    }
}
