//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;
use std::str::FromStr;

use crate::registry::RegionSpec;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Map storage and loading settings
    pub maps: MapsSettings,
    /// Logging settings
    pub logging: LoggingSettings,
    /// Declared map regions, in declaration order
    pub regions: Vec<RegionSpec>,
}

/// Map storage configuration.
#[derive(Debug, Clone)]
pub struct MapsSettings {
    /// Directory containing the regional map images
    pub directory: PathBuf,
    /// When rasters are decoded: on first use or all at startup
    pub loading: LoadingMode,
}

/// Raster loading strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingMode {
    /// Decode each map the first time a coordinate needs it
    Lazy,
    /// Decode every declared map at startup
    Eager,
}

impl LoadingMode {
    /// Canonical config-file spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            LoadingMode::Lazy => "lazy",
            LoadingMode::Eager => "eager",
        }
    }
}

impl FromStr for LoadingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lazy" => Ok(LoadingMode::Lazy),
            "eager" => Ok(LoadingMode::Eager),
            other => Err(format!(
                "unknown loading mode '{}' (must be 'lazy' or 'eager')",
                other
            )),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
