//! Sort command - order versions by precedence.

use anyhow::Result;
use clap::Args;
use reqver::Semver;

use crate::output::{emit, Format};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort from highest to lowest
    #[arg(short = 'r', long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs, format: Format) -> Result<i32> {
    let sorted = if args.reverse {
        Semver::rsort(&args.versions)?
    } else {
        Semver::sort(&args.versions)?
    };

    emit(format, &sorted, || {
        sorted.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    })?;
    Ok(0)
}
