//! Raster color audit against a reference scale.
//!
//! Verifies that a map export uses only the colors its scale defines.
//! Unexpected colors usually mean the export was resampled or compressed
//! lossily; missing colors are normal for regions that simply lack that
//! pollution level.

use std::collections::HashMap;

use super::{ColorLevelEntry, PollutionScale};
use crate::raster::Raster;

/// How many of the most frequent colors the audit report keeps.
const TOP_COLOR_COUNT: usize = 10;

/// One color observed in a raster, with its pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    /// Observed RGB value
    pub rgb: [u8; 3],
    /// Number of pixels carrying this exact value
    pub count: u64,
    /// Level the scale assigns this exact color, if any
    pub level: Option<u8>,
}

/// Report comparing a raster's colors against a reference scale.
#[derive(Debug, Clone)]
pub struct ScaleAudit {
    /// Total pixels examined
    pub total_pixels: u64,
    /// Number of distinct RGB values in the raster
    pub unique_colors: usize,
    /// Colors present in the raster but absent from the scale, most frequent first
    pub unexpected: Vec<ColorCount>,
    /// Scale entries whose color never appears in the raster
    pub missing: Vec<ColorLevelEntry>,
    /// Most frequent colors overall, most frequent first
    pub top_colors: Vec<ColorCount>,
}

impl ScaleAudit {
    /// Whether every raster color is a canonical scale color.
    pub fn is_clean(&self) -> bool {
        self.unexpected.is_empty()
    }
}

impl PollutionScale {
    /// Audit a raster's colors against this scale.
    pub fn audit(&self, raster: &Raster) -> ScaleAudit {
        let mut counts: HashMap<[u8; 3], u64> = HashMap::new();
        for rgb in raster.pixels() {
            *counts.entry(rgb).or_insert(0) += 1;
        }

        let exact_level = |rgb: [u8; 3]| {
            self.entries()
                .iter()
                .find(|e| e.rgb == rgb)
                .map(|e| e.level)
        };

        let mut unexpected: Vec<ColorCount> = counts
            .iter()
            .filter(|(rgb, _)| exact_level(**rgb).is_none())
            .map(|(rgb, count)| ColorCount {
                rgb: *rgb,
                count: *count,
                level: None,
            })
            .collect();
        unexpected.sort_by(|a, b| b.count.cmp(&a.count).then(a.rgb.cmp(&b.rgb)));

        let missing: Vec<ColorLevelEntry> = self
            .entries()
            .iter()
            .filter(|e| !counts.contains_key(&e.rgb))
            .copied()
            .collect();

        let mut top_colors: Vec<ColorCount> = counts
            .iter()
            .map(|(rgb, count)| ColorCount {
                rgb: *rgb,
                count: *count,
                level: exact_level(*rgb),
            })
            .collect();
        top_colors.sort_by(|a, b| b.count.cmp(&a.count).then(a.rgb.cmp(&b.rgb)));
        top_colors.truncate(TOP_COLOR_COUNT);

        ScaleAudit {
            total_pixels: raster.pixel_count(),
            unique_colors: counts.len(),
            unexpected,
            missing,
            top_colors,
        }
    }
}
