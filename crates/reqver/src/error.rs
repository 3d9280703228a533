//! Error types

use thiserror::Error;

/// A string that is not a valid version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version string \"{0}\"")]
pub struct InvalidVersionError(String);

impl InvalidVersionError {
    pub(crate) fn new(input: &str) -> Self {
        InvalidVersionError(input.to_string())
    }

    /// The rejected input, verbatim
    pub fn input(&self) -> &str {
        &self.0
    }
}

/// A string that is not a valid requirement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid requirement string \"{0}\"")]
pub struct InvalidRequirementError(String);

impl InvalidRequirementError {
    pub(crate) fn new(input: &str) -> Self {
        InvalidRequirementError(input.to_string())
    }

    /// The rejected input, verbatim
    pub fn input(&self) -> &str {
        &self.0
    }
}

/// Either parse failure, returned by calls that accept raw strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Version(#[from] InvalidVersionError),
    #[error(transparent)]
    Requirement(#[from] InvalidRequirementError),
}
