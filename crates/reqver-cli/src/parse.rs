//! Parse command - show the components of a version.

use anyhow::{Context, Result};
use clap::Args;
use reqver::Version;
use serde::Serialize;

use crate::output::{emit, Format};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version to parse
    #[arg(value_name = "VERSION")]
    pub version: String,
}

#[derive(Serialize, Debug)]
struct ParseReport<'a> {
    version: &'a Version,
    major: u64,
    minor: u64,
    patch: u64,
    pre: Vec<String>,
    build: Option<&'a str>,
}

impl<'a> ParseReport<'a> {
    fn new(version: &'a Version) -> Self {
        ParseReport {
            version,
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre: version.pre().iter().map(ToString::to_string).collect(),
            build: version.build(),
        }
    }

    fn text(&self) -> String {
        let mut lines = vec![
            format!("version: {}", self.version),
            format!("major:   {}", self.major),
            format!("minor:   {}", self.minor),
            format!("patch:   {}", self.patch),
        ];
        if !self.pre.is_empty() {
            lines.push(format!("pre:     {}", self.pre.join(".")));
        }
        if let Some(build) = self.build {
            lines.push(format!("build:   {}", build));
        }
        lines.join("\n")
    }
}

pub fn execute(args: ParseArgs, format: Format) -> Result<i32> {
    let version = Version::parse(&args.version).context("Could not parse version")?;
    let report = ParseReport::new(&version);
    emit(format, &report, || report.text())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_text() {
        let version = Version::parse("1.2.3-rc.1+build.9").unwrap();
        let report = ParseReport::new(&version);
        assert_eq!(
            report.text(),
            "version: 1.2.3-rc.1+build.9\nmajor:   1\nminor:   2\npatch:   3\npre:     rc.1\nbuild:   build.9"
        );
    }

    #[test]
    fn test_report_json() {
        let version = Version::parse("1.2.3-rc.1").unwrap();
        let json = serde_json::to_value(ParseReport::new(&version)).unwrap();
        assert_eq!(json["version"], "1.2.3-rc.1");
        assert_eq!(json["patch"], 3);
        assert_eq!(json["pre"], serde_json::json!(["rc", "1"]));
        assert!(json["build"].is_null());
    }
}
