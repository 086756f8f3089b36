//! Regional map declarations and loaded maps.
//!
//! A [`RegionSpec`] is pure configuration: the geographic extent, raster
//! file, scale, and resolution priority declared for one map. A
//! [`RegionalMap`] pairs a spec with its decoded raster and is immutable
//! once loaded.

use std::path::PathBuf;

use crate::coord::GeoBounds;
use crate::raster::Raster;
use crate::scale::{PollutionScale, ScaleKind};

/// Default resolution priority for declared regions (lower resolves first).
pub const DEFAULT_PRIORITY: u32 = 100;

/// Declared configuration for one regional map.
#[derive(Debug, Clone)]
pub struct RegionSpec {
    /// Region identifier (e.g. "NorthAmerica")
    pub name: String,
    /// Geographic extent of the raster
    pub bounds: GeoBounds,
    /// Raster file name inside the maps directory, `<RegionName><Year>.<ext>`
    pub file: PathBuf,
    /// Declared raster dimensions, checked against the decoded file
    pub expected_dimensions: Option<(u32, u32)>,
    /// Which reference color scale the raster encodes
    pub scale: ScaleKind,
    /// Resolution priority: lower values are consulted first when bounding
    /// boxes overlap
    pub priority: u32,
    /// Whether this map serves coordinates no region covers
    pub fallback: bool,
}

impl RegionSpec {
    /// Create a spec with default priority, standard scale, and no fallback role.
    pub fn new(name: impl Into<String>, bounds: GeoBounds, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            bounds,
            file: file.into(),
            expected_dimensions: None,
            scale: ScaleKind::default(),
            priority: DEFAULT_PRIORITY,
            fallback: false,
        }
    }

    /// Set the declared raster dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.expected_dimensions = Some((width, height));
        self
    }

    /// Set the reference scale.
    pub fn with_scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }

    /// Set the resolution priority (lower resolves first).
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Mark this region as the fallback for uncovered coordinates.
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// The six continental 2024 map declarations.
    ///
    /// Bounding boxes and raster dimensions match the published 2024 world
    /// atlas exports, which encode the extended 15-level scale.
    pub fn continental_2024() -> Vec<RegionSpec> {
        let region = |name: &str, bounds: (f64, f64, f64, f64), dims: (u32, u32), file: &str| {
            let (lat_min, lat_max, lon_min, lon_max) = bounds;
            RegionSpec::new(
                name,
                GeoBounds::new(lat_min, lat_max, lon_min, lon_max)
                    .expect("continental bounds are valid"),
                file,
            )
            .with_dimensions(dims.0, dims.1)
            .with_scale(ScaleKind::Extended)
        };

        vec![
            region(
                "NorthAmerica",
                (7.0, 75.0, -180.0, -51.0),
                (15480, 8160),
                "NorthAmerica2024.png",
            ),
            region(
                "SouthAmerica",
                (-57.0, 14.0, -93.0, -33.0),
                (7200, 8520),
                "SouthAmerica2024.png",
            ),
            region(
                "Europe",
                (34.0, 75.0, -32.0, 70.0),
                (12240, 4920),
                "Europe2024.png",
            ),
            region(
                "Africa",
                (-36.0, 38.0, -26.0, 64.0),
                (10800, 8800),
                "Africa2024.png",
            ),
            region(
                "Asia",
                (5.0, 75.0, 60.0, 180.0),
                (14400, 8400),
                "Asia2024.png",
            ),
            region(
                "Australia",
                (-48.0, 8.0, 94.0, 180.0),
                (10320, 6720),
                "Australia2024.png",
            ),
        ]
    }
}

/// A regional map with its raster loaded.
///
/// Owns its decoded pixel grid exclusively; never mutated after load.
#[derive(Debug)]
pub struct RegionalMap {
    spec: RegionSpec,
    raster: Raster,
}

impl RegionalMap {
    /// Pair a spec with its decoded raster.
    pub fn new(spec: RegionSpec, raster: Raster) -> Self {
        Self { spec, raster }
    }

    /// Region identifier.
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Geographic extent.
    pub fn bounds(&self) -> GeoBounds {
        self.spec.bounds
    }

    /// The declared spec.
    pub fn spec(&self) -> &RegionSpec {
        &self.spec
    }

    /// Decoded pixel grid.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// The reference scale this map's colors encode.
    pub fn scale(&self) -> &'static PollutionScale {
        self.spec.scale.table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continental_2024_covers_six_regions() {
        let regions = RegionSpec::continental_2024();
        assert_eq!(regions.len(), 6);
        assert!(regions.iter().all(|r| r.scale == ScaleKind::Extended));
        assert!(regions.iter().all(|r| !r.fallback));
    }

    #[test]
    fn test_continental_file_naming_convention() {
        for spec in RegionSpec::continental_2024() {
            let file = spec.file.to_string_lossy().into_owned();
            assert!(file.starts_with(&spec.name), "{}", file);
            assert!(file.ends_with("2024.png"), "{}", file);
        }
    }

    #[test]
    fn test_builder_methods() {
        let bounds = GeoBounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
        let spec = RegionSpec::new("Test", bounds, "Test2024.png")
            .with_dimensions(100, 50)
            .with_scale(ScaleKind::Extended)
            .with_priority(5)
            .with_fallback(true);

        assert_eq!(spec.expected_dimensions, Some((100, 50)));
        assert_eq!(spec.scale, ScaleKind::Extended);
        assert_eq!(spec.priority, 5);
        assert!(spec.fallback);
    }

    #[test]
    fn test_regional_map_accessors() {
        let bounds = GeoBounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
        let spec = RegionSpec::new("Test", bounds, "Test2024.png").with_scale(ScaleKind::Standard);
        let raster = Raster::from_pixels(1, 1, vec![[0, 0, 0]]).unwrap();
        let map = RegionalMap::new(spec, raster);

        assert_eq!(map.name(), "Test");
        assert_eq!(map.bounds(), bounds);
        assert_eq!(map.scale().name(), "standard");
        assert_eq!(map.raster().dimensions(), (1, 1));
    }
}
