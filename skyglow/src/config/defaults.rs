//! Default values and constants for all configuration settings.
//!
//! Contains the `DEFAULT_*` constants, path helpers, and the
//! `Settings::default()` implementation.

use std::path::PathBuf;

use super::settings::*;
use crate::registry::RegionSpec;

/// Default map directory name, relative to the config directory.
pub const DEFAULT_MAPS_DIRECTORY: &str = "maps";

/// Default log file name, relative to the config directory.
pub const DEFAULT_LOG_FILE: &str = "skyglow.log";

/// Default raster loading mode.
pub const DEFAULT_LOADING_MODE: LoadingMode = LoadingMode::Lazy;

/// Get the path to the config directory (~/.skyglow).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".skyglow")
}

/// Get the path to the config file (~/.skyglow/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maps: MapsSettings::default(),
            logging: LoggingSettings::default(),
            regions: RegionSpec::continental_2024(),
        }
    }
}

impl Default for MapsSettings {
    fn default() -> Self {
        Self {
            directory: config_directory().join(DEFAULT_MAPS_DIRECTORY),
            loading: DEFAULT_LOADING_MODE,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: config_directory().join(DEFAULT_LOG_FILE),
        }
    }
}
