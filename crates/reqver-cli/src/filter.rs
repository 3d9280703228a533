//! Filter command - keep the versions that satisfy a requirement.

use anyhow::Result;
use clap::Args;
use reqver::{MatchOptions, Semver};

use crate::check::pre_flag;
use crate::output::{emit, Format};

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Requirement to filter by
    #[arg(value_name = "REQUIREMENT")]
    pub requirement: String,

    /// Candidate versions
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Let `>`, `>=` and `~>` match pre-releases (default)
    #[arg(long, overrides_with = "no_pre")]
    pub allow_pre: bool,

    /// Exclude pre-releases from `>`, `>=` and `~>` unless the requirement names one
    #[arg(long, overrides_with = "allow_pre")]
    pub no_pre: bool,
}

impl FilterArgs {
    pub fn allow_pre_flag(&self) -> Option<bool> {
        pre_flag(self.allow_pre, self.no_pre)
    }
}

pub fn execute(args: FilterArgs, format: Format, allow_pre: bool) -> Result<i32> {
    let satisfied = Semver::satisfied_by(&args.versions, args.requirement.as_str(), MatchOptions { allow_pre })?;
    log::debug!(
        "{} of {} versions satisfy {:?}",
        satisfied.len(),
        args.versions.len(),
        args.requirement
    );

    emit(format, &satisfied, || {
        satisfied.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    })?;
    Ok(if satisfied.is_empty() { 1 } else { 0 })
}
