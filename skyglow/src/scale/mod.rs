//! Reference color scales and the nearest-match color classifier.
//!
//! A [`PollutionScale`] is an immutable, ordered table of reference colors,
//! each bound to an ordinal light-pollution level (0 = darkest). The
//! classifier finds the entry nearest to an arbitrary RGB input under squared
//! Euclidean distance, which absorbs antialiasing and compression noise in
//! map exports while remaining exact for canonical colors.

mod audit;
mod tables;

pub use audit::{ColorCount, ScaleAudit};

use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

/// One row of a reference color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorLevelEntry {
    /// Reference color as 8-bit RGB channels
    pub rgb: [u8; 3],
    /// Ordinal level: 0 = darkest/best, increasing = brighter/worse
    pub level: u8,
    /// Human-readable sky-quality label
    pub description: &'static str,
}

/// Result of classifying one RGB value against a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatch {
    /// Level of the nearest reference entry
    pub level: u8,
    /// Squared Euclidean RGB distance to that entry (0 = exact match)
    pub distance: u32,
}

/// Errors raised when constructing a custom scale.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// The table has no entries
    #[error("scale '{0}' has no entries")]
    Empty(String),

    /// Two entries share the same reference color
    #[error("scale '{name}' has duplicate reference color {rgb:?}")]
    DuplicateColor { name: String, rgb: [u8; 3] },

    /// Levels are not strictly increasing in table order
    #[error("scale '{name}' levels not strictly increasing at entry {index}")]
    UnorderedLevels { name: String, index: usize },
}

/// Which built-in scale a regional map classifies against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleKind {
    /// 8-entry scale, levels 0-7
    #[default]
    Standard,
    /// 15-entry scale, levels 0-14, for finer-grained maps
    Extended,
}

impl ScaleKind {
    /// The shared table for this kind.
    pub fn table(self) -> &'static PollutionScale {
        match self {
            ScaleKind::Standard => PollutionScale::standard(),
            ScaleKind::Extended => PollutionScale::extended(),
        }
    }

    /// Configuration-file spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ScaleKind::Standard => "standard",
            ScaleKind::Extended => "extended",
        }
    }
}

impl FromStr for ScaleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(ScaleKind::Standard),
            "extended" => Ok(ScaleKind::Extended),
            other => Err(format!(
                "unknown scale '{}' (must be 'standard' or 'extended')",
                other
            )),
        }
    }
}

/// An immutable, ordered reference color table.
///
/// Entries are kept in canonical scale order (darkest first). The table is
/// validated at construction: reference colors are pairwise distinct and
/// levels strictly increase, so classification is deterministic.
#[derive(Debug, Clone)]
pub struct PollutionScale {
    name: String,
    entries: Vec<ColorLevelEntry>,
}

impl PollutionScale {
    /// Build a custom scale from an ordered entry table.
    pub fn new(
        name: impl Into<String>,
        entries: impl Into<Vec<ColorLevelEntry>>,
    ) -> Result<Self, ScaleError> {
        let name = name.into();
        let entries = entries.into();

        if entries.is_empty() {
            return Err(ScaleError::Empty(name));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|prev| prev.rgb == entry.rgb) {
                return Err(ScaleError::DuplicateColor {
                    name,
                    rgb: entry.rgb,
                });
            }
            if i > 0 && entries[i - 1].level >= entry.level {
                return Err(ScaleError::UnorderedLevels { name, index: i });
            }
        }
        Ok(Self { name, entries })
    }

    /// Shared standard 8-level scale.
    pub fn standard() -> &'static PollutionScale {
        static SCALE: OnceLock<PollutionScale> = OnceLock::new();
        SCALE.get_or_init(|| {
            PollutionScale::new("standard", tables::STANDARD_ENTRIES.as_slice())
                .expect("built-in standard scale is valid")
        })
    }

    /// Shared extended 15-level scale.
    pub fn extended() -> &'static PollutionScale {
        static SCALE: OnceLock<PollutionScale> = OnceLock::new();
        SCALE.get_or_init(|| {
            PollutionScale::new("extended", tables::EXTENDED_ENTRIES.as_slice())
                .expect("built-in extended scale is valid")
        })
    }

    /// Scale name (e.g. "standard", "extended").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in canonical order.
    pub fn entries(&self) -> &[ColorLevelEntry] {
        &self.entries
    }

    /// Highest level in the table.
    pub fn max_level(&self) -> u8 {
        // Levels strictly increase, so the last entry holds the maximum.
        self.entries[self.entries.len() - 1].level
    }

    /// Human label for a level, if the table defines it.
    pub fn description(&self, level: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.level == level)
            .map(|e| e.description)
    }

    /// Classify an RGB value against the table.
    ///
    /// Linear scan over the entries computing squared Euclidean distance in
    /// RGB space; the table is small and fixed, so no spatial index is
    /// warranted. Ties on equal minimum distance resolve to the lower level:
    /// entries are ordered by ascending level and only a strictly smaller
    /// distance displaces the current best.
    ///
    /// Always returns a best-effort answer. Callers needing a confidence
    /// threshold can inspect [`ColorMatch::distance`].
    pub fn classify(&self, rgb: [u8; 3]) -> ColorMatch {
        let mut best = ColorMatch {
            level: self.entries[0].level,
            distance: color_distance_sq(rgb, self.entries[0].rgb),
        };
        for entry in &self.entries[1..] {
            let distance = color_distance_sq(rgb, entry.rgb);
            if distance < best.distance {
                best = ColorMatch {
                    level: entry.level,
                    distance,
                };
            }
        }
        best
    }
}

/// Squared Euclidean distance between two RGB colors.
#[inline]
fn color_distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}
