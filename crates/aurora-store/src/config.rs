//! Data-dir resolution and the `aurora.toml` config file.
//!
//! The config carries caller-side policy only: where to scan, the display
//! threshold for tag suggestions, and whether the resurfacing panel shows.
//! The inference core never reads any of this.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default base directory for all Aurora storage.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".aurora")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve the data directory: `AURORA_DATA_DIR` override, else `~/.aurora`.
pub fn data_dir() -> PathBuf {
    env::var("AURORA_DATA_DIR")
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(default_base_dir)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories the scanner walks to build the file catalogue.
    pub scan_roots: Vec<PathBuf>,
    /// Suggestions below this confidence are not surfaced by default.
    pub min_confidence: f64,
    /// Whether the "Remember this?" panel is shown at all.
    pub show_remember_this: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_roots: Vec::new(),
            min_confidence: 0.3,
            show_remember_this: true,
        }
    }
}

impl Config {
    pub fn path_in(base: &Path) -> PathBuf {
        base.join("aurora.toml")
    }

    /// Load from the data dir, falling back to defaults when the file does
    /// not exist yet.
    pub fn load(base: &Path) -> Result<Self> {
        let path = Self::path_in(base);
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, base: &Path) -> Result<()> {
        fs::create_dir_all(base)?;
        let rendered = toml::to_string_pretty(self)
            .map_err(|e| crate::error::StoreError::InvalidData(e.to_string()))?;
        fs::write(Self::path_in(base), rendered)?;
        Ok(())
    }
}
