//! Geographic coordinate types.
//!
//! Provides the [`Coordinate`] value type used throughout the library and the
//! [`GeoBounds`] axis-aligned bounding box that declares a regional map's
//! geographic coverage.

use thiserror::Error;

/// Valid latitude range in decimal degrees.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in decimal degrees.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Errors that can occur when constructing coordinate types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is outside the valid range (-90 to 90)
    #[error("invalid latitude: {0} (must be between {MIN_LAT} and {MAX_LAT})")]
    InvalidLatitude(f64),

    /// Longitude is outside the valid range (-180 to 180)
    #[error("invalid longitude: {0} (must be between {MIN_LON} and {MAX_LON})")]
    InvalidLongitude(f64),

    /// Bounding box is degenerate (min not strictly less than max)
    #[error("degenerate bounding box: lat [{lat_min}, {lat_max}], lon [{lon_min}, {lon_max}]")]
    DegenerateBounds {
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    },
}

/// A (latitude, longitude) pair in decimal degrees.
///
/// Value type, passed by value. Construction validates both axes against the
/// world ranges, so a `Coordinate` is always geographically meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, -90 (south) to 90 (north)
    pub lat: f64,
    /// Longitude in decimal degrees, -180 (west) to 180 (east)
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both axes.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&lat) || !lat.is_finite() {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) || !lon.is_finite() {
            return Err(CoordError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// An axis-aligned rectangle in latitude/longitude space.
///
/// Declares the geographic extent of a regional map. Invariant: min is
/// strictly less than max on both axes and all edges lie within world ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBounds {
    /// Create a bounding box, rejecting degenerate or out-of-world extents.
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&lat_min) {
            return Err(CoordError::InvalidLatitude(lat_min));
        }
        if !(MIN_LAT..=MAX_LAT).contains(&lat_max) {
            return Err(CoordError::InvalidLatitude(lat_max));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon_min) {
            return Err(CoordError::InvalidLongitude(lon_min));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon_max) {
            return Err(CoordError::InvalidLongitude(lon_max));
        }
        if lat_min >= lat_max || lon_min >= lon_max {
            return Err(CoordError::DegenerateBounds {
                lat_min,
                lat_max,
                lon_min,
                lon_max,
            });
        }
        Ok(Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        })
    }

    /// Whether the coordinate lies within the box. Bounds are inclusive on
    /// all four edges, so corner queries resolve to the owning region.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.lat_min..=self.lat_max).contains(&coord.lat)
            && (self.lon_min..=self.lon_max).contains(&coord.lon)
    }

    /// North-south extent in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// East-west extent in degrees.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.lon_max - self.lon_min
    }
}

impl std::fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat [{}, {}], lon [{}, {}]",
            self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_valid() {
        let coord = Coordinate::new(40.7128, -74.0060).unwrap();
        assert_eq!(coord.lat, 40.7128);
        assert_eq!(coord.lon, -74.0060);
    }

    #[test]
    fn test_coordinate_at_world_edges() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_coordinate_invalid_latitude() {
        let result = Coordinate::new(999.0, 0.0);
        assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
    }

    #[test]
    fn test_coordinate_invalid_longitude() {
        let result = Coordinate::new(0.0, -180.5);
        assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
    }

    #[test]
    fn test_coordinate_rejects_nan() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_bounds_valid() {
        let bounds = GeoBounds::new(7.0, 75.0, -180.0, -51.0).unwrap();
        assert_eq!(bounds.lat_span(), 68.0);
        assert_eq!(bounds.lon_span(), 129.0);
    }

    #[test]
    fn test_bounds_degenerate_rejected() {
        assert!(matches!(
            GeoBounds::new(10.0, 10.0, 0.0, 5.0),
            Err(CoordError::DegenerateBounds { .. })
        ));
        assert!(matches!(
            GeoBounds::new(0.0, 10.0, 5.0, -5.0),
            Err(CoordError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn test_bounds_out_of_world_rejected() {
        assert!(GeoBounds::new(-91.0, 10.0, 0.0, 5.0).is_err());
        assert!(GeoBounds::new(0.0, 10.0, 0.0, 181.0).is_err());
    }

    #[test]
    fn test_contains_interior_point() {
        let bounds = GeoBounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
        assert!(bounds.contains(Coordinate::new(5.0, 5.0).unwrap()));
    }

    #[test]
    fn test_contains_is_inclusive_at_edges() {
        let bounds = GeoBounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
        assert!(bounds.contains(Coordinate::new(0.0, 0.0).unwrap()));
        assert!(bounds.contains(Coordinate::new(10.0, 10.0).unwrap()));
        assert!(bounds.contains(Coordinate::new(10.0, 0.0).unwrap()));
    }

    #[test]
    fn test_contains_rejects_outside() {
        let bounds = GeoBounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
        assert!(!bounds.contains(Coordinate::new(10.1, 5.0).unwrap()));
        assert!(!bounds.contains(Coordinate::new(5.0, -0.1).unwrap()));
    }
}
