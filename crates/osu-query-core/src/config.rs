//! User configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::mode::GameMode;

/// Configuration for osu-query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mode used when a command doesn't name one
    pub default_mode: GameMode,
    /// Print JSON instead of a human-readable listing
    pub json: bool,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("osu-query").join("config.json"))
    }

    /// Load config from disk, falling back to defaults if not found or unreadable
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_or_default(&path))
            .unwrap_or_default()
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::debug!("Using default config ({}): {}", path.display(), e);
            Self::default()
        })
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
