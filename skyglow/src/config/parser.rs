//! INI parsing logic for converting `Ini` → `Settings`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::{Ini, Properties};
use std::path::PathBuf;

use super::file::ConfigError;
use super::settings::Settings;
use crate::coord::GeoBounds;
use crate::registry::RegionSpec;
use crate::scale::ScaleKind;

/// Section-name prefix for user-declared map regions.
const REGION_SECTION_PREFIX: &str = "region:";

/// Parse an `Ini` object into `Settings`.
///
/// Starts from `Settings::default()` and overlays any values found in the
/// INI. Declaring any `[region:<Name>]` section replaces the built-in
/// continental region set entirely, so a config file describes exactly the
/// maps it wants.
pub(super) fn parse_ini(ini: &Ini) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    // [maps] section
    if let Some(section) = ini.section(Some("maps")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                settings.maps.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("loading") {
            settings.maps.loading = v.parse().map_err(|reason| ConfigError::InvalidValue {
                section: "maps".to_string(),
                key: "loading".to_string(),
                value: v.to_string(),
                reason,
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                settings.logging.file = expand_tilde(v);
            }
        }
    }

    // [region:<Name>] sections
    let mut regions = Vec::new();
    for (name, props) in ini.iter() {
        let Some(name) = name else { continue };
        let Some(region_name) = name.strip_prefix(REGION_SECTION_PREFIX) else {
            continue;
        };
        regions.push(parse_region(name, region_name.trim(), props)?);
    }
    if !regions.is_empty() {
        settings.regions = regions;
    }

    Ok(settings)
}

/// Parse one `[region:<Name>]` section into a `RegionSpec`.
fn parse_region(section: &str, name: &str, props: &Properties) -> Result<RegionSpec, ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: "name".to_string(),
            value: String::new(),
            reason: "region section needs a name after 'region:'".to_string(),
        });
    }

    let file = require(section, props, "file")?;
    let lat_min = require_f64(section, props, "lat_min")?;
    let lat_max = require_f64(section, props, "lat_max")?;
    let lon_min = require_f64(section, props, "lon_min")?;
    let lon_max = require_f64(section, props, "lon_max")?;
    let bounds = GeoBounds::new(lat_min, lat_max, lon_min, lon_max).map_err(|e| {
        ConfigError::InvalidValue {
            section: section.to_string(),
            key: "bounds".to_string(),
            value: format!(
                "lat [{}, {}], lon [{}, {}]",
                lat_min, lat_max, lon_min, lon_max
            ),
            reason: e.to_string(),
        }
    })?;

    let mut spec = RegionSpec::new(name, bounds, file);

    match (props.get("width"), props.get("height")) {
        (Some(w), Some(h)) => {
            let width = parse_u32(section, "width", w)?;
            let height = parse_u32(section, "height", h)?;
            spec = spec.with_dimensions(width, height);
        }
        (None, None) => {}
        (Some(_), None) => {
            return Err(ConfigError::MissingKey {
                section: section.to_string(),
                key: "height".to_string(),
            });
        }
        (None, Some(_)) => {
            return Err(ConfigError::MissingKey {
                section: section.to_string(),
                key: "width".to_string(),
            });
        }
    }

    if let Some(v) = props.get("scale") {
        let scale: ScaleKind = v.parse().map_err(|reason| ConfigError::InvalidValue {
            section: section.to_string(),
            key: "scale".to_string(),
            value: v.to_string(),
            reason,
        })?;
        spec = spec.with_scale(scale);
    }

    if let Some(v) = props.get("priority") {
        spec = spec.with_priority(parse_u32(section, "priority", v)?);
    }

    if let Some(v) = props.get("fallback") {
        let fallback = v
            .to_lowercase()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                section: section.to_string(),
                key: "fallback".to_string(),
                value: v.to_string(),
                reason: "must be 'true' or 'false'".to_string(),
            })?;
        spec = spec.with_fallback(fallback);
    }

    Ok(spec)
}

fn require<'a>(section: &str, props: &'a Properties, key: &str) -> Result<&'a str, ConfigError> {
    match props.get(key).map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        }),
    }
}

fn require_f64(section: &str, props: &Properties, key: &str) -> Result<f64, ConfigError> {
    let v = require(section, props, key)?;
    v.parse().map_err(|_| ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: v.to_string(),
        reason: "must be a decimal number of degrees".to_string(),
    })
}

fn parse_u32(section: &str, key: &str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: "must be a non-negative integer".to_string(),
    })
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
