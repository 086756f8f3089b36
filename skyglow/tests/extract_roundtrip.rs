//! End-to-end extraction through a config file on disk.
//!
//! Builds a real config.ini and map image in a temp directory, then runs
//! the whole path: settings load, registry construction, coordinate
//! resolution, classification, and CSV enrichment.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use skyglow::config::{LoadingMode, Settings};
use skyglow::coord::Coordinate;
use skyglow::enrich::{enrich_csv, EnrichOptions};
use skyglow::extract::{IndexExtractor, UNKNOWN_INDEX};
use skyglow::registry::MapRegistry;

/// 4x4 extended-scale map over lat/lon [0, 4]:
/// row 0 (north) is pristine black, row 3 (south) is inner-city white.
fn write_map(dir: &Path) {
    let rows: [[u8; 3]; 4] = [
        [0, 0, 0],       // level 0
        [33, 84, 216],   // level 4
        [253, 150, 80],  // level 10
        [242, 242, 242], // level 14
    ];
    let mut img = image::RgbImage::new(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            img.put_pixel(x, y, image::Rgb(rows[y as usize]));
        }
    }
    img.save(dir.join("Test2024.png")).unwrap();
}

fn write_config(dir: &Path, loading: &str) -> std::path::PathBuf {
    let config_path = dir.join("config.ini");
    fs::write(
        &config_path,
        format!(
            r#"[maps]
directory = {}
loading = {}

[region:Test]
file = Test2024.png
lat_min = 0.0
lat_max = 4.0
lon_min = 0.0
lon_max = 4.0
width = 4
height = 4
scale = extended
"#,
            dir.display(),
            loading
        ),
    )
    .unwrap();
    config_path
}

fn extractor_from(config_path: &Path) -> IndexExtractor {
    let settings = Settings::load_from(config_path).unwrap();
    IndexExtractor::new(Arc::new(MapRegistry::from_settings(&settings)))
}

#[test]
fn test_extracts_expected_index_per_latitude_band() {
    let dir = tempfile::tempdir().unwrap();
    write_map(dir.path());
    let config_path = write_config(dir.path(), "lazy");
    let extractor = extractor_from(&config_path);

    // One sample per row, north to south.
    let expectations = [(3.5, 0), (2.5, 4), (1.5, 10), (0.5, 14)];
    for (lat, expected) in expectations {
        let result = extractor.extract(Coordinate::new(lat, 2.0).unwrap());
        assert_eq!(result.index, expected, "lat {}", lat);
        assert_eq!(result.source_map.as_deref(), Some("Test"));
        assert_eq!(result.matched_color_distance, 0);
    }
}

#[test]
fn test_uncovered_coordinate_returns_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    write_map(dir.path());
    let config_path = write_config(dir.path(), "lazy");
    let extractor = extractor_from(&config_path);

    let result = extractor.extract(Coordinate::new(-10.0, -10.0).unwrap());
    assert_eq!(result.index, UNKNOWN_INDEX);
    assert!(result.source_map.is_none());
}

#[test]
fn test_eager_loading_decodes_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    write_map(dir.path());
    let config_path = write_config(dir.path(), "eager");

    let settings = Settings::load_from(&config_path).unwrap();
    assert_eq!(settings.maps.loading, LoadingMode::Eager);

    let registry = MapRegistry::from_settings(&settings);
    assert!(registry.is_loaded("Test"));
}

#[test]
fn test_enrichment_through_configured_registry() {
    let dir = tempfile::tempdir().unwrap();
    write_map(dir.path());
    let config_path = write_config(dir.path(), "lazy");
    let extractor = extractor_from(&config_path);

    let input = "Name,Latitude,Longitude\n\
                 north,3.5,2.0\n\
                 south,0.5,2.0\n\
                 offmap,-10.0,-10.0\n";
    let mut output = Vec::new();
    let stats = enrich_csv(
        &extractor,
        input.as_bytes(),
        &mut output,
        &EnrichOptions::default(),
    )
    .unwrap();

    assert_eq!(stats.rows, 3);
    assert_eq!(stats.enriched, 2);
    assert_eq!(stats.unresolved, 1);

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Name,Latitude,Longitude,LightPollutionIndex");
    assert_eq!(lines[1], "north,3.5,2.0,0");
    assert_eq!(lines[2], "south,0.5,2.0,14");
    assert_eq!(lines[3], "offmap,-10.0,-10.0,-1");
}
