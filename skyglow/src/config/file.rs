//! Configuration file handling for ~/.skyglow/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in
//! [`super::defaults`], parsing in [`super::parser`], and serialization in
//! [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults::config_file_path;
use super::settings::Settings;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    Write(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Required key absent from a section
    #[error("Missing configuration: {section} needs '{key}'")]
    MissingKey { section: String, key: String },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    Directory(std::io::Error),
}

impl Settings {
    /// Load configuration from the default path (~/.skyglow/config.ini).
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.skyglow/config.ini).
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Directory)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigError::Write(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigError> {
        let path = config_file_path();
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(&path)?;
        }
        Ok(path)
    }
}
