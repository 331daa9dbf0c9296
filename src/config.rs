use anyhow::{bail, Context, Result};
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::civil::{parse_civil, CivilDateTime, DEFAULT_TARGET};

pub const CONFIG_FILE: &str = ".countdown-tz.toml";

/// Configuration for the countdown-tz tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
#[schemars(title = "countdown-tz Configuration")]
pub struct Config {
    /// Civil target date and time, read in the selected zone (e.g., "2026-01-01 00:00:00")
    pub target: String,
    /// Zone selected at startup instead of the system zone (e.g., "Europe/Paris")
    pub zone: Option<String>,
    /// Milliseconds between countdown refreshes
    pub tick_ms: u64,
    /// Keep ticking after the countdown reaches zero
    pub keep_running: bool,
    /// Zone catalog settings
    pub catalog: CatalogConfig,
}

/// Zone catalog settings
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// List zones that belong to no country (e.g., "Etc/GMT+3")
    pub include_unmapped: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_unmapped: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            zone: None,
            tick_ms: 1000,
            keep_running: false,
            catalog: CatalogConfig::default(),
        }
    }
}

impl Config {
    /// Parsed target, with a command-line override taking precedence
    pub fn target(&self, override_target: Option<&str>) -> Result<CivilDateTime> {
        let raw = override_target.unwrap_or(&self.target);
        parse_civil(raw).with_context(|| {
            format!("invalid target '{raw}': expected YYYY-MM-DD[ HH:MM:SS]")
        })
    }

    pub fn tick_interval(&self) -> Result<Duration> {
        if self.tick_ms == 0 {
            bail!("tick_ms must be greater than zero");
        }
        Ok(Duration::from_millis(self.tick_ms))
    }

    /// Load config from .countdown-tz.toml, searching up from the given directory
    pub fn load(start_dir: &Path) -> Result<Self> {
        if let Some(path) = find_config_file(start_dir) {
            Self::from_file(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Search for .countdown-tz.toml from start_dir upward
fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
