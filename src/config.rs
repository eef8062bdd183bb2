//! Configuration module for taglist
//!
//! Manages default tag list behavior and an optional default vocabulary.
//! Configuration is stored in the user's config directory
//! (`~/.config/taglist/config.toml` on Linux).
//!
//! ```toml
//! prompt = "Colors"
//! theme = "light"
//!
//! [list]
//! allow_duplicates = false
//! max_items = 3
//! reorder_enabled = true
//!
//! [[vocabulary]]
//! value = "red"
//! selected = true
//!
//! [[vocabulary]]
//! value = "green"
//! ```

use crate::seed::VocabularyEntry;
use crate::taglist::TagListConfig;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Color theme selection
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Dark terminal background
    #[default]
    Dark,
    /// Light terminal background
    Light,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TaglistConfig {
    /// Title shown on the input widget
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Color theme for the TUI
    #[serde(default)]
    pub theme: ThemeName,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default tag list behavior
    #[serde(default)]
    pub list: TagListConfig,

    /// Vocabulary used when none is given on the command line
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
}

fn default_prompt() -> String {
    "Tags".to_string()
}

impl Default for TaglistConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            theme: ThemeName::default(),
            quiet: false,
            list: TagListConfig::default(),
            vocabulary: Vec::new(),
        }
    }
}

impl TaglistConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("taglist").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path`; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
