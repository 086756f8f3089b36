//! INI serialization logic for converting `Settings` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::fmt::Write as _;
use std::path::Path;

use super::settings::Settings;

/// Convert `Settings` to a commented INI string for saving.
pub(super) fn to_config_string(settings: &Settings) -> String {
    let mut out = format!(
        r#"[maps]
; Directory containing the regional map images.
; Each declared region's file is resolved relative to this directory.
directory = {}
; When map rasters are decoded (default: lazy)
;   lazy  - decode each map the first time a coordinate needs it
;   eager - decode every declared map at startup
loading = {}

[logging]
; Log file path (default: ~/.skyglow/skyglow.log)
file = {}

; Map regions. Declaring any [region:<Name>] section below replaces the
; built-in continental set entirely. Required keys: file, lat_min, lat_max,
; lon_min, lon_max. Optional: width + height (declared raster dimensions),
; scale (standard | extended), priority (lower resolves first, default 100),
; fallback (true | false).
"#,
        path_to_string(&settings.maps.directory),
        settings.maps.loading.as_str(),
        path_to_string(&settings.logging.file),
    );

    for region in &settings.regions {
        let _ = write!(
            out,
            r#"
[region:{}]
file = {}
lat_min = {}
lat_max = {}
lon_min = {}
lon_max = {}
"#,
            region.name,
            path_to_string(&region.file),
            region.bounds.lat_min,
            region.bounds.lat_max,
            region.bounds.lon_min,
            region.bounds.lon_max,
        );
        if let Some((width, height)) = region.expected_dimensions {
            let _ = writeln!(out, "width = {}", width);
            let _ = writeln!(out, "height = {}", height);
        }
        let _ = writeln!(out, "scale = {}", region.scale.as_str());
        let _ = writeln!(out, "priority = {}", region.priority);
        if region.fallback {
            let _ = writeln!(out, "fallback = true");
        }
    }

    out
}

fn path_to_string(path: &Path) -> String {
    path.display().to_string()
}
