//! Configuration handling
//!
//! Settings come from `./tusk.toml` next to where the program runs, or
//! from the per-user config directory (`~/.config/tusk/config.toml` on
//! Linux). Every key has a default, so no config file is required.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Name of the per-directory config file.
const PROJECT_FILE: &str = "tusk.toml";

/// User-tunable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the task file.
    pub data_file: PathBuf,

    /// Colorize console output.
    pub color: bool,

    /// Per-character delay for the typing effect, in milliseconds.
    /// 0 disables the effect.
    pub typing_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("tasks.txt"),
            color: true,
            typing_delay_ms: 0,
        }
    }
}

impl Config {
    /// Loads configuration from the first location that exists:
    /// `./tusk.toml`, then the user config directory, then defaults.
    pub fn load() -> Result<Self> {
        let local = Path::new(PROJECT_FILE);
        if local.exists() {
            return Self::load_from(local);
        }
        if let Some(dirs) = ProjectDirs::from("", "", "tusk") {
            let global = dirs.config_dir().join("config.toml");
            if global.exists() {
                return Self::load_from(&global);
            }
        }
        Ok(Self::default())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}
