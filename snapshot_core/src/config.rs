//! Serialization toggles, loaded from a TOML file
//!
//! The store only records opt-outs: any key absent from the file is
//! serialized. Keys are the dotted names the composer consults, quoted in
//! TOML:
//!
//! ```toml
//! [serialize]
//! "player-ender-chest" = false
//! "player.stats" = true
//! ```

use crate::composer::SerializeToggle;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading the serialization toggle configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path}': {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    serialize: HashMap<String, bool>,
}

/// Per-key serialization toggles
#[derive(Debug, Clone, Default)]
pub struct SerializationConfig {
    toggles: HashMap<String, bool>,
}

impl SerializationConfig {
    /// Create a store with every key enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Load toggles from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            error,
            path: path.to_path_buf(),
        })?;
        Self::from_toml(&content).map_err(|error| ConfigError::Parse {
            error,
            path: path.to_path_buf(),
        })
    }

    /// Parse toggles from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(SerializationConfig {
            toggles: file.serialize,
        })
    }

    /// Set a toggle programmatically
    pub fn set(&mut self, key: impl Into<String>, enabled: bool) {
        self.toggles.insert(key.into(), enabled);
    }

    /// Whether a key should be serialized; unlisted keys are enabled
    pub fn get(&self, key: &str) -> bool {
        self.toggles.get(key).copied().unwrap_or(true)
    }
}

impl SerializeToggle for SerializationConfig {
    fn should_serialize(&self, key: &str) -> bool {
        self.get(key)
    }
}
