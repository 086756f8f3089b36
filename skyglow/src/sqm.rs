//! Sky-quality reference values per extended pollution level.
//!
//! Each extended-scale level (0-14) maps to measured sky brightness in
//! magnitudes per square arcsecond ("mpsa", higher = darker) and to the
//! artificial-to-natural luminance ratio ("lpi"). The tables carry the
//! minimum and band-average value for each level and are used to enrich
//! observation datasets with physically meaningful columns alongside the
//! ordinal index.

use crate::scale::ScaleKind;

/// Reference sky-quality values for one extended-scale level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyQuality {
    /// Darkest sky brightness in the band, mag/arcsec²
    pub min_mpsa: f64,
    /// Band-average sky brightness, mag/arcsec²
    pub avg_mpsa: f64,
    /// Lowest artificial/natural luminance ratio in the band
    pub min_lpi: f64,
    /// Band-average luminance ratio
    pub avg_lpi: f64,
}

const MIN_MPSA: [f64; 15] = [
    22.00, 21.99, 21.93, 21.89, 21.81, 21.69, 21.51, 21.25, 20.91, 20.49, 20.02, 19.50, 18.95,
    18.38, 17.80,
];

const AVG_MPSA: [f64; 15] = [
    21.995, 21.96, 21.91, 21.85, 21.75, 21.60, 21.38, 21.08, 20.70, 20.255, 19.76, 19.225, 18.665,
    18.09, 17.80,
];

const MIN_LPI: [f64; 15] = [
    0.0, 0.01, 0.06, 0.11, 0.19, 0.33, 0.58, 1.0, 1.73, 3.0, 5.2, 9.0, 15.59, 27.0, 46.77,
];

const AVG_LPI: [f64; 15] = [
    0.005, 0.035, 0.085, 0.15, 0.26, 0.455, 0.79, 1.365, 2.365, 4.1, 7.1, 12.295, 21.295, 36.885,
    46.77,
];

/// Reference values for an extended-scale level, or `None` above level 14.
pub fn for_extended_level(level: u8) -> Option<SkyQuality> {
    let i = level as usize;
    if i >= MIN_MPSA.len() {
        return None;
    }
    Some(SkyQuality {
        min_mpsa: MIN_MPSA[i],
        avg_mpsa: AVG_MPSA[i],
        min_lpi: MIN_LPI[i],
        avg_lpi: AVG_LPI[i],
    })
}

/// Reference values for a classified level on the given scale.
///
/// Only the extended scale has direct table entries; standard-scale levels
/// are mapped onto the extended table at twice their value (the standard
/// scale keeps every other band of the extended one).
pub fn for_level(kind: ScaleKind, level: u8) -> Option<SkyQuality> {
    match kind {
        ScaleKind::Extended => for_extended_level(level),
        ScaleKind::Standard => for_extended_level(level.checked_mul(2)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::PollutionScale;

    #[test]
    fn test_tables_cover_every_extended_level() {
        let max = PollutionScale::extended().max_level();
        for level in 0..=max {
            assert!(for_extended_level(level).is_some(), "level {}", level);
        }
        assert!(for_extended_level(max + 1).is_none());
    }

    #[test]
    fn test_brightness_decreases_with_level() {
        // Higher pollution level means brighter sky, so mpsa must not increase.
        let values: Vec<_> = (0..15).map(|l| for_extended_level(l).unwrap()).collect();
        for pair in values.windows(2) {
            assert!(pair[1].min_mpsa <= pair[0].min_mpsa);
            assert!(pair[1].avg_mpsa <= pair[0].avg_mpsa);
        }
    }

    #[test]
    fn test_luminance_ratio_increases_with_level() {
        let values: Vec<_> = (0..15).map(|l| for_extended_level(l).unwrap()).collect();
        for pair in values.windows(2) {
            assert!(pair[1].min_lpi >= pair[0].min_lpi);
            assert!(pair[1].avg_lpi >= pair[0].avg_lpi);
        }
    }

    #[test]
    fn test_darkest_level_reference_values() {
        let q = for_extended_level(0).unwrap();
        assert_eq!(q.min_mpsa, 22.00);
        assert_eq!(q.min_lpi, 0.0);
    }

    #[test]
    fn test_standard_scale_maps_to_alternate_bands() {
        let standard = for_level(ScaleKind::Standard, 3).unwrap();
        let extended = for_level(ScaleKind::Extended, 6).unwrap();
        assert_eq!(standard, extended);

        // Standard level 7 maps to extended level 14, the last band.
        assert!(for_level(ScaleKind::Standard, 7).is_some());
        assert!(for_level(ScaleKind::Standard, 8).is_none());
    }
}
