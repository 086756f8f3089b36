//! Regional map registry with a load-once raster cache.
//!
//! The registry owns the declared [`RegionSpec`] set and resolves which map
//! covers a queried coordinate. Resolution order is the explicit priority
//! declared per region (lower first, declaration order breaking ties), never
//! incidental iteration order, so overlapping regions resolve
//! deterministically.
//!
//! # Thread Safety
//!
//! Rasters are cached in a `DashMap` keyed by region name. Loading is
//! load-once-per-key from the cache's perspective: concurrent first loads of
//! the same region may race, but both decode identical bytes and the loser's
//! copy is dropped. No query ever mutates a cached map; eviction is explicit
//! invalidation only.

mod region;

pub use region::{RegionSpec, RegionalMap, DEFAULT_PRIORITY};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::coord::Coordinate;
use crate::raster::{Raster, RasterError};

/// Errors recorded when a regional map fails to load.
#[derive(Debug, Error)]
pub enum MapLoadError {
    /// Raster file does not exist at the expected path
    #[error("map file for region '{region}' not found: {path}")]
    Missing { region: String, path: PathBuf },

    /// Raster file exists but could not be decoded
    #[error("failed to load region '{region}': {source}")]
    Unreadable {
        region: String,
        #[source]
        source: RasterError,
    },
}

/// The set of known regional maps and their shared raster cache.
pub struct MapRegistry {
    maps_dir: PathBuf,
    /// Sorted by (priority, declaration order); resolution scans in order.
    specs: Vec<RegionSpec>,
    cache: DashMap<String, Arc<RegionalMap>>,
    /// Regions excluded after a failed load. Never retried implicitly.
    failures: DashMap<String, MapLoadError>,
}

impl MapRegistry {
    /// Create a registry over a maps directory and a set of declared regions.
    ///
    /// A missing directory yields a registry that resolves nothing until
    /// [`MapRegistry::invalidate`] is called after maps are added; this is
    /// deliberate so a misconfigured deployment degrades to sentinel results
    /// instead of failing outright.
    pub fn new(maps_dir: impl Into<PathBuf>, mut specs: Vec<RegionSpec>) -> Self {
        let maps_dir = maps_dir.into();
        if !maps_dir.is_dir() {
            warn!(
                dir = %maps_dir.display(),
                "maps directory does not exist; all lookups will be unresolved"
            );
        }
        // Stable sort keeps declaration order within equal priorities.
        specs.sort_by_key(|s| s.priority);

        Self {
            maps_dir,
            specs,
            cache: DashMap::new(),
            failures: DashMap::new(),
        }
    }

    /// Build a registry from loaded configuration, honoring the eager/lazy
    /// loading mode.
    pub fn from_settings(settings: &crate::config::Settings) -> Self {
        let registry = Self::new(settings.maps.directory.clone(), settings.regions.clone());
        if settings.maps.loading == crate::config::LoadingMode::Eager {
            let loaded = registry.preload();
            debug!(loaded, total = registry.specs.len(), "eager preload complete");
        }
        registry
    }

    /// Declared regions in resolution order.
    pub fn specs(&self) -> &[RegionSpec] {
        &self.specs
    }

    /// Look up a declared region by name.
    pub fn spec(&self, name: &str) -> Option<&RegionSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Resolve the map covering a coordinate.
    ///
    /// Scans regions in priority order and returns the first whose bounding
    /// box contains the coordinate (inclusive edges) and whose raster loads.
    /// A region whose raster fails to load is excluded (with the error
    /// recorded) and the scan continues. When nothing covers the coordinate,
    /// the designated fallback region is returned if one is configured.
    pub fn resolve(&self, coord: Coordinate) -> Option<Arc<RegionalMap>> {
        for spec in self.specs.iter().filter(|s| s.bounds.contains(coord)) {
            if let Some(map) = self.get_or_load(spec) {
                return Some(map);
            }
        }
        self.specs
            .iter()
            .find(|s| s.fallback)
            .and_then(|spec| self.get_or_load(spec))
    }

    /// Load (or fetch from cache) a region by name.
    pub fn get(&self, name: &str) -> Option<Arc<RegionalMap>> {
        self.spec(name).and_then(|spec| self.get_or_load(spec))
    }

    /// Eagerly load every declared region, recording failures.
    ///
    /// Failures are per-region and non-fatal; initialization continues past
    /// them. Returns the number of regions loaded successfully.
    pub fn preload(&self) -> usize {
        self.specs
            .iter()
            .filter(|spec| self.get_or_load(spec).is_some())
            .count()
    }

    /// Load failures recorded so far, as (region, error message) pairs.
    pub fn load_failures(&self) -> Vec<(String, String)> {
        self.failures
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().to_string()))
            .collect()
    }

    /// Whether a region's raster is currently cached.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Drop all cached rasters and recorded failures.
    ///
    /// The only way map data is ever refreshed; nothing is reloaded until
    /// the next resolve.
    pub fn invalidate(&self) {
        self.cache.clear();
        self.failures.clear();
    }

    fn get_or_load(&self, spec: &RegionSpec) -> Option<Arc<RegionalMap>> {
        if let Some(map) = self.cache.get(&spec.name) {
            return Some(Arc::clone(&map));
        }
        if self.failures.contains_key(&spec.name) {
            return None;
        }

        match self.load(spec) {
            Ok(map) => {
                let map = Arc::new(map);
                self.cache
                    .entry(spec.name.clone())
                    .or_insert_with(|| Arc::clone(&map));
                debug!(region = %spec.name, "loaded regional map");
                Some(map)
            }
            Err(err) => {
                warn!(region = %spec.name, error = %err, "excluding region after load failure");
                self.failures.insert(spec.name.clone(), err);
                None
            }
        }
    }

    fn load(&self, spec: &RegionSpec) -> Result<RegionalMap, MapLoadError> {
        let path = self.maps_dir.join(&spec.file);
        if !path.is_file() {
            return Err(MapLoadError::Missing {
                region: spec.name.clone(),
                path,
            });
        }

        let raster = Raster::load(&path).map_err(|source| MapLoadError::Unreadable {
            region: spec.name.clone(),
            source,
        })?;

        if let Some((width, height)) = spec.expected_dimensions {
            if raster.dimensions() != (width, height) {
                // Projection uses the decoded dimensions; the declaration is
                // only a sanity check.
                warn!(
                    region = %spec.name,
                    expected_width = width,
                    expected_height = height,
                    actual_width = raster.width(),
                    actual_height = raster.height(),
                    "raster dimensions differ from declaration"
                );
            }
        }

        Ok(RegionalMap::new(spec.clone(), raster))
    }
}

/// List raster files in a directory matching `<RegionName><Year>.<ext>`.
///
/// Convenience for discovering candidate files; bounding boxes still have to
/// be declared in configuration since the rasters do not embed them.
pub fn scan_maps_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"))
        })
        .filter(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                // Name must end in a 4-digit year. Slicing by byte index
                // would panic on multibyte names, so use a checked slice.
                .is_some_and(|stem| {
                    stem.len() > 4
                        && stem
                            .get(stem.len() - 4..)
                            .is_some_and(|year| year.chars().all(|c| c.is_ascii_digit()))
                })
        })
        .collect();
    files.sort();
    files
}
