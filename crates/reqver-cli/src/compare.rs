//! Compare command - order two versions.

use std::cmp::Ordering;

use anyhow::Result;
use clap::Args;
use reqver::Semver;
use serde::Serialize;

use crate::output::{emit, Format};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First version
    #[arg(value_name = "A")]
    pub first: String,

    /// Second version
    #[arg(value_name = "B")]
    pub second: String,
}

#[derive(Serialize, Debug)]
struct CompareReport {
    result: &'static str,
}

pub fn ordering_label(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "lt",
        Ordering::Equal => "eq",
        Ordering::Greater => "gt",
    }
}

pub fn execute(args: CompareArgs, format: Format) -> Result<i32> {
    let ordering = Semver::compare(args.first.as_str(), args.second.as_str())?;
    let report = CompareReport {
        result: ordering_label(ordering),
    };
    emit(format, &report, || report.result.to_string())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_label() {
        assert_eq!(ordering_label(Semver::compare("1.0.0-rc", "1.0.0").unwrap()), "lt");
        assert_eq!(ordering_label(Semver::compare("1.0.0+a", "1.0.0+b").unwrap()), "eq");
        assert_eq!(ordering_label(Semver::compare("1.0.1", "1.0.0").unwrap()), "gt");
    }
}
