//! SkyGlow - Light-pollution index extraction from regional sky-brightness maps
//!
//! This library maps geographic coordinates to light-pollution severity levels
//! by selecting the correct regional raster map, locating the corresponding
//! pixel, and translating its color into a standardized ordinal scale via a
//! nearest-match color lookup.
//!
//! # High-Level API
//!
//! For most use cases, build a [`registry::MapRegistry`] from configuration
//! and wrap it in an [`extract::IndexExtractor`]:
//!
//! ```ignore
//! use skyglow::config::Settings;
//! use skyglow::coord::Coordinate;
//! use skyglow::extract::IndexExtractor;
//! use skyglow::registry::MapRegistry;
//! use std::sync::Arc;
//!
//! let settings = Settings::load_from(config_path)?;
//! let registry = Arc::new(MapRegistry::from_settings(&settings));
//! let extractor = IndexExtractor::new(registry);
//!
//! let coord = Coordinate::new(40.7128, -74.0060)?;
//! let result = extractor.extract(coord);
//! println!("index: {}", result.index);
//! ```

pub mod config;
pub mod coord;
pub mod enrich;
pub mod extract;
pub mod georef;
pub mod logging;
pub mod raster;
pub mod registry;
pub mod scale;
pub mod search;
pub mod sqm;

/// Version of the SkyGlow library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
