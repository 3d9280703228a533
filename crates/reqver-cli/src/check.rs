//! Match command - check a version against a requirement.

use anyhow::Result;
use clap::Args;
use reqver::{MatchOptions, Requirement, Version};
use serde::Serialize;

use crate::output::{emit, Format};

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Version to check
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Requirement, e.g. "~> 2.1 or >= 3.0.0"
    #[arg(value_name = "REQUIREMENT")]
    pub requirement: String,

    /// Let `>`, `>=` and `~>` match pre-releases (default)
    #[arg(long, overrides_with = "no_pre")]
    pub allow_pre: bool,

    /// Exclude pre-releases from `>`, `>=` and `~>` unless the requirement names one
    #[arg(long, overrides_with = "allow_pre")]
    pub no_pre: bool,
}

impl MatchArgs {
    pub fn allow_pre_flag(&self) -> Option<bool> {
        pre_flag(self.allow_pre, self.no_pre)
    }
}

/// Collapse a `--allow-pre` / `--no-pre` pair into an optional override
pub fn pre_flag(allow_pre: bool, no_pre: bool) -> Option<bool> {
    match (allow_pre, no_pre) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Serialize, Debug)]
struct MatchReport<'a> {
    version: &'a Version,
    requirement: &'a Requirement,
    allow_pre: bool,
    matches: bool,
}

pub fn execute(args: MatchArgs, format: Format, allow_pre: bool) -> Result<i32> {
    let version = Version::parse(&args.version)?;
    let requirement = Requirement::parse(&args.requirement)?;
    let matches = requirement.matches_with(&version, MatchOptions { allow_pre });

    let report = MatchReport {
        version: &version,
        requirement: &requirement,
        allow_pre,
        matches,
    };
    emit(format, &report, || matches.to_string())?;

    Ok(if matches { 0 } else { 1 })
}
