//! Semantic version parsing and requirement matching
//!
//! This crate parses SemVer 2.0 version strings, orders them, and evaluates
//! requirements such as `~> 2.1 or >= 3.0.0 and < 4.0.0` against them.
//!
//! ```
//! use reqver::{MatchOptions, Requirement, Version};
//!
//! let requirement = Requirement::parse("~> 2.1.2").unwrap();
//! assert!(requirement.matches(&Version::parse("2.1.6").unwrap()));
//! assert!(!requirement.matches_with(
//!     &Version::parse("2.1.6-dev").unwrap(),
//!     MatchOptions::exclude_pre(),
//! ));
//! ```

mod comparator;
mod error;
mod matcher;
pub mod requirement;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use error::{Error, InvalidRequirementError, InvalidVersionError};
pub use matcher::MatchOptions;
pub use requirement::{Clause, Combinator, Deprecation, Operand, Operator, Requirement};
pub use semver::{AsRequirement, AsVersion, Semver};
pub use version::{PreId, Version};
