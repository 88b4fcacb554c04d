//! Configuration management for hosted action sheets

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::controller::ConfigSource;
use crate::error::{self, Error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Theme mode; sheets get the class `action-sheet-<mode>`
    #[serde(default = "default_mode")]
    pub mode: String,

    /// How long taps are ignored after a dismissal, in milliseconds
    #[serde(default = "default_min_click_block")]
    pub min_click_block_ms: u64,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_mode() -> String {
    "md".to_string()
}

const fn default_min_click_block() -> u64 {
    400
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            min_click_block_ms: default_min_click_block(),
            keys: KeyBindings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> error::Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> error::Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        std::env::var_os("ACTION_SHEET_CONFIG").map_or_else(
            || {
                std::env::var_os("XDG_CONFIG_HOME")
                    .map(PathBuf::from)
                    .or_else(|| {
                        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
                    })
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("action-sheet")
                    .join("config.json")
            },
            PathBuf::from,
        )
    }
}

impl ConfigSource for AppConfig {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            "mode" => Some(self.mode.clone()),
            crate::presenter::MIN_CLICK_BLOCK_KEY => Some(self.min_click_block_ms.to_string()),
            _ => None,
        }
    }
}
