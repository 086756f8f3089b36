//! Coordinate-to-pixel georeferencing.
//!
//! Converts a (latitude, longitude) pair into integer pixel coordinates
//! within a specific map's raster via a linear projection over the map's
//! declared bounding box. Row 0 is the northern edge: latitude decreases
//! downward in raster row order.

use thiserror::Error;

use crate::coord::Coordinate;
use crate::registry::RegionalMap;

/// Transient result of georeferencing: the sampled pixel.
///
/// Consumed immediately by the color classifier; not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    /// Column, 0 at the western edge
    pub x: u32,
    /// Row, 0 at the northern edge
    pub y: u32,
    /// Raw color at (x, y)
    pub rgb: [u8; 3],
}

/// Errors that can occur during projection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The coordinate lies strictly outside the map's bounding box
    #[error("coordinate ({lat}, {lon}) outside region '{region}' bounds")]
    OutOfBounds {
        lat: f64,
        lon: f64,
        region: String,
    },
}

/// Project a coordinate onto a map's raster and sample the pixel there.
///
/// The projection is linear in both axes:
///
/// ```text
/// px = floor((lon - lon_min) / (lon_max - lon_min) * W)   clamped to [0, W-1]
/// py = floor((lat_max - lat) / (lat_max - lat_min) * H)   clamped to [0, H-1]
/// ```
///
/// Clamping only absorbs floating-point rounding at the exact boundary (a
/// query at `lon == lon_max` lands on the easternmost column); coordinates
/// strictly outside the bounding box are rejected with
/// [`ProjectionError::OutOfBounds`] rather than silently clamped. The
/// registry's resolve step normally guarantees containment, but the check is
/// re-done here for direct callers.
pub fn project(map: &RegionalMap, coord: Coordinate) -> Result<PixelSample, ProjectionError> {
    let bounds = map.bounds();
    if !bounds.contains(coord) {
        return Err(ProjectionError::OutOfBounds {
            lat: coord.lat,
            lon: coord.lon,
            region: map.name().to_string(),
        });
    }

    let (width, height) = map.raster().dimensions();

    // Containment guarantees both fractions are in [0, 1], so the float-to-
    // int cast truncates toward zero, which is floor here.
    let x_frac = (coord.lon - bounds.lon_min) / bounds.lon_span();
    let y_frac = (bounds.lat_max - coord.lat) / bounds.lat_span();
    let x = ((x_frac * width as f64) as u32).min(width - 1);
    let y = ((y_frac * height as f64) as u32).min(height - 1);

    let rgb = map
        .raster()
        .pixel(x, y)
        .ok_or(ProjectionError::OutOfBounds {
            lat: coord.lat,
            lon: coord.lon,
            region: map.name().to_string(),
        })?;

    Ok(PixelSample { x, y, rgb })
}
