//! Common setup shared across CLI commands.
//!
//! Encapsulates config loading, logging initialization, and registry
//! construction to reduce duplication across command handlers.

use std::path::Path;
use std::sync::Arc;

use skyglow::config::Settings;
use skyglow::coord::Coordinate;
use skyglow::extract::IndexExtractor;
use skyglow::logging::{init_logging, LoggingGuard};
use skyglow::registry::MapRegistry;
use tracing::info;

use crate::error::CliError;

/// Shared command context: loaded settings plus active logging.
pub struct Context {
    settings: Settings,
    // Keeps the log file writer alive for the life of the command.
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
}

impl Context {
    /// Load settings (from `config_path` if given, else the default
    /// location) and initialize logging from them.
    pub fn new(config_path: Option<&Path>) -> Result<Self, CliError> {
        let settings = match config_path {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };

        let logging_guard =
            init_logging(&settings.logging.file).map_err(|e| CliError::LoggingInit(e.to_string()))?;

        info!(
            regions = settings.regions.len(),
            maps_dir = %settings.maps.directory.display(),
            "configuration loaded"
        );

        Ok(Self {
            settings,
            logging_guard,
        })
    }

    /// Loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the map registry declared by the settings.
    pub fn registry(&self) -> Arc<MapRegistry> {
        Arc::new(MapRegistry::from_settings(&self.settings))
    }

    /// Build an index extractor over the configured maps.
    pub fn extractor(&self) -> IndexExtractor {
        IndexExtractor::new(self.registry())
    }
}

/// Parse a latitude/longitude pair from command-line values.
pub fn parse_coordinate(lat: f64, lon: f64) -> Result<Coordinate, CliError> {
    Coordinate::new(lat, lon).map_err(|e| CliError::InvalidArgument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_validates_range() {
        assert!(parse_coordinate(51.5, -0.1).is_ok());
        assert!(matches!(
            parse_coordinate(95.0, 0.0),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_coordinate(0.0, 200.0),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_context_reads_alternate_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.ini");
        std::fs::write(
            &config,
            format!(
                "[maps]\ndirectory = {}\n\n[logging]\nfile = {}\n",
                dir.path().join("maps").display(),
                dir.path().join("skyglow.log").display()
            ),
        )
        .unwrap();

        let ctx = Context::new(Some(&config)).unwrap();
        assert_eq!(ctx.settings().maps.directory, dir.path().join("maps"));
        // Continental defaults survive when no regions are declared.
        assert_eq!(ctx.settings().regions.len(), 6);
    }
}
