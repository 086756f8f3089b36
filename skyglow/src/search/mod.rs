//! Darker-site search.
//!
//! Scans the regional map around a center coordinate for pixels classified
//! strictly darker than the center, within a great-circle radius. Candidates
//! are ordered by pollution level first, then proximity, so the best nearby
//! sky wins.

use tracing::debug;

use crate::coord::Coordinate;
use crate::georef;
use crate::registry::MapRegistry;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude (and of longitude at the equator).
const KM_PER_DEGREE: f64 = 111.0;

/// A candidate observation site darker than the search center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateSite {
    /// Pixel-center coordinate of the site
    pub coordinate: Coordinate,
    /// Classified level at the site (on the covering map's scale)
    pub level: u8,
    /// Great-circle distance from the search center
    pub distance_km: f64,
}

/// Great-circle distance between two coordinates (haversine formula).
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Find up to `limit` sites darker than the center within `radius_km`.
///
/// Returns an empty list when the center is uncovered by any map, the
/// radius is non-positive, or nothing within the radius classifies strictly
/// darker than the center. Candidates come from a single map (the one
/// covering the center), so levels are mutually comparable.
pub fn find_darker_sites(
    registry: &MapRegistry,
    center: Coordinate,
    radius_km: f64,
    limit: usize,
) -> Vec<CandidateSite> {
    if radius_km <= 0.0 || limit == 0 {
        return Vec::new();
    }
    let Some(map) = registry.resolve(center) else {
        debug!(%center, "darker-site search outside map coverage");
        return Vec::new();
    };
    let Ok(center_sample) = georef::project(&map, center) else {
        return Vec::new();
    };
    let center_level = map.scale().classify(center_sample.rgb).level;

    // Window in degrees around the center, clamped to the map's bounds.
    // Longitude degrees shrink with latitude; the cosine is floored to keep
    // the window bounded near the poles.
    let bounds = map.bounds();
    let lat_delta = radius_km / KM_PER_DEGREE;
    let lon_delta = radius_km / (KM_PER_DEGREE * center.lat.to_radians().cos().max(0.1));

    let lat_min = (center.lat - lat_delta).max(bounds.lat_min);
    let lat_max = (center.lat + lat_delta).min(bounds.lat_max);
    let lon_min = (center.lon - lon_delta).max(bounds.lon_min);
    let lon_max = (center.lon + lon_delta).min(bounds.lon_max);

    // Corner projections give the pixel window; both corners are inside the
    // map's bounds after clamping.
    let corner = |lat: f64, lon: f64| {
        Coordinate::new(lat, lon)
            .ok()
            .and_then(|c| georef::project(&map, c).ok())
    };
    let (Some(nw), Some(se)) = (corner(lat_max, lon_min), corner(lat_min, lon_max)) else {
        return Vec::new();
    };

    let (width, height) = map.raster().dimensions();
    let mut candidates = Vec::new();
    for y in nw.y..=se.y {
        for x in nw.x..=se.x {
            // Pixel-center coordinate, the inverse of the projection.
            let lon = bounds.lon_min + (x as f64 + 0.5) / width as f64 * bounds.lon_span();
            let lat = bounds.lat_max - (y as f64 + 0.5) / height as f64 * bounds.lat_span();
            let Ok(coordinate) = Coordinate::new(lat, lon) else {
                continue;
            };

            let distance_km = haversine_km(center, coordinate);
            if distance_km > radius_km {
                continue;
            }

            let Some(rgb) = map.raster().pixel(x, y) else {
                continue;
            };
            let level = map.scale().classify(rgb).level;
            if level < center_level {
                candidates.push(CandidateSite {
                    coordinate,
                    level,
                    distance_km,
                });
            }
        }
    }

    candidates.sort_by(|a, b| {
        a.level
            .cmp(&b.level)
            .then(a.distance_km.total_cmp(&b.distance_km))
    });
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoBounds;
    use crate::registry::RegionSpec;
    use crate::scale::ScaleKind;
    use std::path::Path;

    fn registry_with_gradient(dir: &Path) -> MapRegistry {
        // 8x8 map over lat/lon [0, 8]: bright city everywhere except one
        // dark rural column at the western edge and one pristine pixel in
        // the northwest corner.
        let mut img = image::RgbImage::from_pixel(8, 8, image::Rgb([160, 160, 160]));
        for y in 0..8 {
            img.put_pixel(0, y, image::Rgb([20, 47, 114]));
        }
        img.put_pixel(0, 0, image::Rgb([0, 0, 0]));
        img.save(dir.join("Grad2024.png")).unwrap();

        MapRegistry::new(
            dir,
            vec![RegionSpec::new(
                "Grad",
                GeoBounds::new(0.0, 8.0, 0.0, 8.0).unwrap(),
                "Grad2024.png",
            )
            .with_scale(ScaleKind::Standard)],
        )
    }

    #[test]
    fn test_haversine_known_distance() {
        // London to Paris, roughly 344 km.
        let london = Coordinate::new(51.5074, -0.1278).unwrap();
        let paris = Coordinate::new(48.8566, 2.3522).unwrap();
        let d = haversine_km(london, paris);
        assert!((d - 344.0).abs() < 5.0, "got {}", d);
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = Coordinate::new(45.0, 7.0).unwrap();
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_finds_darker_sites_ordered_by_level_then_distance() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with_gradient(dir.path());

        // Center in the bright interior; the dark column is within reach.
        let center = Coordinate::new(4.0, 2.0).unwrap();
        let sites = find_darker_sites(&registry, center, 900.0, 10);

        assert!(!sites.is_empty());
        // Best site is the single pristine pixel.
        assert_eq!(sites[0].level, 0);
        for pair in sites.windows(2) {
            assert!(
                pair[0].level < pair[1].level
                    || (pair[0].level == pair[1].level
                        && pair[0].distance_km <= pair[1].distance_km)
            );
        }
    }

    #[test]
    fn test_all_results_within_radius() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with_gradient(dir.path());

        let center = Coordinate::new(4.0, 2.0).unwrap();
        let radius = 150.0;
        for site in find_darker_sites(&registry, center, radius, 50) {
            assert!(site.distance_km <= radius);
        }
    }

    #[test]
    fn test_limit_respected() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with_gradient(dir.path());

        let center = Coordinate::new(4.0, 2.0).unwrap();
        let sites = find_darker_sites(&registry, center, 900.0, 3);
        assert!(sites.len() <= 3);
    }

    #[test]
    fn test_empty_when_center_is_darkest() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with_gradient(dir.path());

        // Center on the pristine northwest pixel; nothing is darker.
        let center = Coordinate::new(7.5, 0.5).unwrap();
        assert!(find_darker_sites(&registry, center, 900.0, 10).is_empty());
    }

    #[test]
    fn test_empty_outside_coverage() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with_gradient(dir.path());

        let center = Coordinate::new(-40.0, -40.0).unwrap();
        assert!(find_darker_sites(&registry, center, 100.0, 10).is_empty());
    }

    #[test]
    fn test_empty_for_degenerate_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with_gradient(dir.path());
        let center = Coordinate::new(4.0, 2.0).unwrap();

        assert!(find_darker_sites(&registry, center, 0.0, 10).is_empty());
        assert!(find_darker_sites(&registry, center, -5.0, 10).is_empty());
        assert!(find_darker_sites(&registry, center, 100.0, 0).is_empty());
    }
}
