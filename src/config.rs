use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::models::tab::Tab;

/// Start-up preferences. Read once; the dashboard never writes it back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dark_mode: bool,
    pub default_tab: String,
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            dark_mode: false,
            default_tab: Tab::default().id().to_string(),
            tick_rate_ms: 250,
        }
    }
}

impl AppConfig {
    /// Load from `path`, or the default location when `None`. A missing file
    /// yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Like [`AppConfig::load`], but a broken file is logged and replaced by defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("{e:#}; using default settings");
            AppConfig::default()
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The configured start tab. Unknown names fall back to the default tab.
    pub fn initial_tab(&self) -> Tab {
        resolve_tab(&self.default_tab)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(16))
    }
}

pub fn resolve_tab(id: &str) -> Tab {
    id.parse().unwrap_or_else(|e| {
        warn!("{e}; starting on {}", Tab::default());
        Tab::default()
    })
}

fn config_path() -> PathBuf {
    dirs_path().join("config.toml")
}

fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".config").join("socialdash")
}
