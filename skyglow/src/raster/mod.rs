//! Decoded raster pixel grids.
//!
//! A [`Raster`] is the in-memory decoded form of a regional map image:
//! a dense row-major grid of RGB triples. Alpha channels and palette
//! indices are normalized away at load time, so downstream code only ever
//! sees three 8-bit channels per pixel.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading or constructing a raster.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Image file missing or unreadable/undecodable
    #[error("failed to decode raster '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Raster has a zero dimension
    #[error("raster has empty dimensions: {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match width * height
    #[error("pixel buffer length {actual} does not match {width}x{height}")]
    BufferMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// A decoded row-major RGB pixel grid.
///
/// Immutable after construction. Row 0 is the top (northern) edge of the
/// source image.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Raster {
    /// Load and decode an image file into an RGB raster.
    ///
    /// Any format the `image` crate recognizes is accepted; non-RGB modes
    /// (RGBA, grayscale, palette) are converted to 8-bit RGB.
    pub fn load(path: &Path) -> Result<Self, RasterError> {
        let img = image::open(path).map_err(|source| RasterError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        let pixels = rgb
            .into_raw()
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self::from_pixels(width, height, pixels)
    }

    /// Construct a raster from an already-decoded pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RasterError::BufferMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height) pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// The RGB value at (x, y), or `None` when out of range.
    ///
    /// Read-only access into the owned buffer; no copy beyond the triple.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Iterator over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.pixels.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_valid() {
        let raster = Raster::from_pixels(2, 2, vec![[0; 3], [1; 3], [2; 3], [3; 3]]).unwrap();
        assert_eq!(raster.dimensions(), (2, 2));
        assert_eq!(raster.pixel_count(), 4);
    }

    #[test]
    fn test_from_pixels_rejects_zero_dimension() {
        assert!(matches!(
            Raster::from_pixels(0, 5, vec![]),
            Err(RasterError::EmptyDimensions { .. })
        ));
    }

    #[test]
    fn test_from_pixels_rejects_short_buffer() {
        assert!(matches!(
            Raster::from_pixels(2, 2, vec![[0; 3]; 3]),
            Err(RasterError::BufferMismatch { actual: 3, .. })
        ));
    }

    #[test]
    fn test_pixel_row_major_order() {
        let raster = Raster::from_pixels(2, 2, vec![[0; 3], [1; 3], [2; 3], [3; 3]]).unwrap();
        assert_eq!(raster.pixel(0, 0), Some([0; 3]));
        assert_eq!(raster.pixel(1, 0), Some([1; 3]));
        assert_eq!(raster.pixel(0, 1), Some([2; 3]));
        assert_eq!(raster.pixel(1, 1), Some([3; 3]));
    }

    #[test]
    fn test_pixel_out_of_range_returns_none() {
        let raster = Raster::from_pixels(2, 2, vec![[0; 3]; 4]).unwrap();
        assert_eq!(raster.pixel(2, 0), None);
        assert_eq!(raster.pixel(0, 2), None);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = Raster::load(Path::new("/nonexistent/map.png"));
        assert!(matches!(result, Err(RasterError::Decode { .. })));
    }

    #[test]
    fn test_load_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");

        let mut img = image::RgbImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgb([0, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([34, 34, 34]));
        img.save(&path).unwrap();

        let raster = Raster::load(&path).unwrap();
        assert_eq!(raster.dimensions(), (2, 1));
        assert_eq!(raster.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(raster.pixel(1, 0), Some([34, 34, 34]));
    }
}
