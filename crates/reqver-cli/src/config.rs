use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::output::Format;

pub const CONFIG_FILE: &str = "reqver.toml";

/// The reqver configuration file structure (reqver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReqverConfig {
    /// Matching defaults
    #[serde(rename = "match")]
    pub matching: MatchConfig,

    /// Output defaults
    pub output: OutputConfig,
}

/// Defaults for `match` and `filter`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Whether `>`, `>=` and `~>` admit pre-release versions
    pub allow_pre: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<Format>,
}

impl ReqverConfig {
    /// Load configuration from reqver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: ReqverConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                log::debug!("Loaded configuration from {}", config_path.display());
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Command line flag first, then the file, then `true`
    pub fn allow_pre(&self, flag: Option<bool>) -> bool {
        flag.or(self.matching.allow_pre).unwrap_or(true)
    }

    /// Command line flag first, then the file, then text
    pub fn format(&self, flag: Option<Format>) -> Format {
        flag.or(self.output.format).unwrap_or_default()
    }
}
