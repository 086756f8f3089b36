//! Index extraction orchestrator.
//!
//! Composes registry resolution, georeferencing, and color classification
//! into one call: coordinate in, light-pollution index out. All
//! per-coordinate failures degrade to the sentinel "unknown" result so that
//! batch enrichment of a large dataset never aborts on a single bad row.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::coord::Coordinate;
use crate::georef;
use crate::registry::MapRegistry;

/// Sentinel index signaling "no result available".
pub const UNKNOWN_INDEX: i16 = -1;

/// The output of one extraction query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightPollutionResult {
    /// Classified level on the source map's scale, or [`UNKNOWN_INDEX`]
    pub index: i16,
    /// Region that satisfied the query, if any
    pub source_map: Option<String>,
    /// Squared RGB distance of the color match (0 = exact)
    pub matched_color_distance: u32,
}

impl LightPollutionResult {
    /// The sentinel result for unresolved coordinates.
    pub fn unknown() -> Self {
        Self {
            index: UNKNOWN_INDEX,
            source_map: None,
            matched_color_distance: 0,
        }
    }

    /// Whether the query produced a real index.
    pub fn is_known(&self) -> bool {
        self.index != UNKNOWN_INDEX
    }
}

/// Orchestrates registry, georeferencer, and classifier.
///
/// Stateless per query aside from the registry's shared read-mostly raster
/// cache, so one extractor can serve concurrent callers.
pub struct IndexExtractor {
    registry: Arc<MapRegistry>,
}

impl IndexExtractor {
    /// Create an extractor over a shared registry.
    pub fn new(registry: Arc<MapRegistry>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Arc<MapRegistry> {
        &self.registry
    }

    /// Extract the light-pollution index at a coordinate.
    ///
    /// Never fails: an uncovered coordinate yields the sentinel result, and
    /// an internal resolve/projection disagreement (a map resolved for a
    /// coordinate its bounding box rejects) is logged and likewise treated
    /// as unresolved.
    pub fn extract(&self, coord: Coordinate) -> LightPollutionResult {
        let Some(map) = self.registry.resolve(coord) else {
            debug!(%coord, "no regional map covers coordinate");
            return LightPollutionResult::unknown();
        };

        let sample = match georef::project(&map, coord) {
            Ok(sample) => sample,
            Err(err) => {
                // Resolve and project disagree on containment. Should not
                // happen when bounding boxes are internally consistent.
                warn!(%coord, region = %map.name(), error = %err, "projection rejected resolved coordinate");
                return LightPollutionResult::unknown();
            }
        };

        let matched = map.scale().classify(sample.rgb);
        LightPollutionResult {
            index: matched.level as i16,
            source_map: Some(map.name().to_string()),
            matched_color_distance: matched.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoBounds;
    use crate::registry::RegionSpec;
    use crate::scale::ScaleKind;
    use std::path::Path;

    fn write_map(dir: &Path, file: &str, pixels: &[[u8; 3]], width: u32, height: u32) {
        let mut img = image::RgbImage::new(width, height);
        for (i, rgb) in pixels.iter().enumerate() {
            let x = i as u32 % width;
            let y = i as u32 / width;
            img.put_pixel(x, y, image::Rgb(*rgb));
        }
        img.save(dir.join(file)).unwrap();
    }

    fn registry_with_one_map(dir: &Path) -> Arc<MapRegistry> {
        // 2x2 raster over lat [0, 10], lon [0, 10]: dark northwest pixel,
        // city-bright elsewhere.
        write_map(
            dir,
            "Test2024.png",
            &[
                [0, 0, 0],
                [160, 160, 160],
                [160, 160, 160],
                [160, 160, 160],
            ],
            2,
            2,
        );
        Arc::new(MapRegistry::new(
            dir,
            vec![RegionSpec::new(
                "Test",
                GeoBounds::new(0.0, 10.0, 0.0, 10.0).unwrap(),
                "Test2024.png",
            )
            .with_scale(ScaleKind::Standard)],
        ))
    }

    #[test]
    fn test_roundtrip_northwest_corner_classifies_darkest() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = IndexExtractor::new(registry_with_one_map(dir.path()));

        let result = extractor.extract(Coordinate::new(10.0, 0.0).unwrap());
        assert_eq!(result.index, 0);
        assert_eq!(result.source_map.as_deref(), Some("Test"));
        assert_eq!(result.matched_color_distance, 0);
    }

    #[test]
    fn test_bright_pixel_classifies_to_high_level() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = IndexExtractor::new(registry_with_one_map(dir.path()));

        let result = extractor.extract(Coordinate::new(1.0, 9.0).unwrap());
        assert_eq!(result.index, 7);
        assert_eq!(result.matched_color_distance, 0);
    }

    #[test]
    fn test_uncovered_coordinate_yields_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = IndexExtractor::new(registry_with_one_map(dir.path()));

        let result = extractor.extract(Coordinate::new(-45.0, 100.0).unwrap());
        assert_eq!(result, LightPollutionResult::unknown());
        assert!(!result.is_known());
    }

    #[test]
    fn test_empty_registry_yields_sentinel() {
        let registry = Arc::new(MapRegistry::new("/nonexistent/maps", Vec::new()));
        let extractor = IndexExtractor::new(registry);

        let result = extractor.extract(Coordinate::new(5.0, 5.0).unwrap());
        assert_eq!(result.index, UNKNOWN_INDEX);
        assert!(result.source_map.is_none());
    }

    #[test]
    fn test_extended_scale_map_uses_its_own_table() {
        let dir = tempfile::tempdir().unwrap();
        // (242, 242, 242) is level 14 on the extended scale.
        write_map(dir.path(), "Fine2024.png", &[[242, 242, 242]], 1, 1);
        let registry = Arc::new(MapRegistry::new(
            dir.path(),
            vec![RegionSpec::new(
                "Fine",
                GeoBounds::new(0.0, 10.0, 0.0, 10.0).unwrap(),
                "Fine2024.png",
            )
            .with_scale(ScaleKind::Extended)],
        ));
        let extractor = IndexExtractor::new(registry);

        let result = extractor.extract(Coordinate::new(5.0, 5.0).unwrap());
        assert_eq!(result.index, 14);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = IndexExtractor::new(registry_with_one_map(dir.path()));
        let coord = Coordinate::new(3.0, 7.0).unwrap();

        let first = extractor.extract(coord);
        let second = extractor.extract(coord);
        assert_eq!(first, second);
    }
}
