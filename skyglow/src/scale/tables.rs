//! Built-in reference color tables.
//!
//! These are the canonical color scales used by the published regional
//! sky-brightness map exports. The standard table carries the 8-level scale
//! (0 = darkest, 7 = brightest); the extended table carries the finer
//! 15-level scale (0-14) used by the 2024 continental map series.

use super::ColorLevelEntry;

/// Standard 8-entry scale, levels 0-7.
pub(super) const STANDARD_ENTRIES: [ColorLevelEntry; 8] = [
    ColorLevelEntry {
        rgb: [0, 0, 0],
        level: 0,
        description: "Pristine dark sky",
    },
    ColorLevelEntry {
        rgb: [34, 34, 34],
        level: 1,
        description: "Typical dark site",
    },
    ColorLevelEntry {
        rgb: [20, 47, 114],
        level: 2,
        description: "Rural sky",
    },
    ColorLevelEntry {
        rgb: [15, 87, 20],
        level: 3,
        description: "Rural/suburban transition",
    },
    ColorLevelEntry {
        rgb: [110, 100, 30],
        level: 4,
        description: "Suburban sky",
    },
    ColorLevelEntry {
        rgb: [191, 100, 30],
        level: 5,
        description: "Bright suburban sky",
    },
    ColorLevelEntry {
        rgb: [251, 90, 73],
        level: 6,
        description: "City sky",
    },
    ColorLevelEntry {
        rgb: [160, 160, 160],
        level: 7,
        description: "Inner-city sky",
    },
];

/// Extended 15-entry scale, levels 0-14, for finer-grained maps.
pub(super) const EXTENDED_ENTRIES: [ColorLevelEntry; 15] = [
    ColorLevelEntry {
        rgb: [0, 0, 0],
        level: 0,
        description: "Pristine dark sky",
    },
    ColorLevelEntry {
        rgb: [34, 34, 34],
        level: 1,
        description: "Excellent dark site",
    },
    ColorLevelEntry {
        rgb: [66, 66, 66],
        level: 2,
        description: "Typical dark site",
    },
    ColorLevelEntry {
        rgb: [20, 47, 114],
        level: 3,
        description: "Dark rural sky",
    },
    ColorLevelEntry {
        rgb: [33, 84, 216],
        level: 4,
        description: "Rural sky",
    },
    ColorLevelEntry {
        rgb: [15, 87, 20],
        level: 5,
        description: "Brighter rural sky",
    },
    ColorLevelEntry {
        rgb: [31, 161, 42],
        level: 6,
        description: "Rural/suburban transition",
    },
    ColorLevelEntry {
        rgb: [110, 100, 30],
        level: 7,
        description: "Dim suburban sky",
    },
    ColorLevelEntry {
        rgb: [184, 166, 37],
        level: 8,
        description: "Suburban sky",
    },
    ColorLevelEntry {
        rgb: [191, 100, 30],
        level: 9,
        description: "Bright suburban sky",
    },
    ColorLevelEntry {
        rgb: [253, 150, 80],
        level: 10,
        description: "Suburban/urban transition",
    },
    ColorLevelEntry {
        rgb: [251, 90, 73],
        level: 11,
        description: "Urban sky",
    },
    ColorLevelEntry {
        rgb: [251, 153, 138],
        level: 12,
        description: "Bright urban sky",
    },
    ColorLevelEntry {
        rgb: [160, 160, 160],
        level: 13,
        description: "City sky",
    },
    ColorLevelEntry {
        rgb: [242, 242, 242],
        level: 14,
        description: "Inner-city sky",
    },
];
