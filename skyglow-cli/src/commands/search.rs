//! `search` command: find darker sites around a coordinate.

use crate::commands::common::{parse_coordinate, Context};
use crate::error::CliError;
use skyglow::search::find_darker_sites;

/// Run the search command.
pub fn run(
    ctx: &Context,
    lat: f64,
    lon: f64,
    radius_km: f64,
    limit: usize,
) -> Result<(), CliError> {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "radius must be a positive number of kilometers, got {}",
            radius_km
        )));
    }

    let center = parse_coordinate(lat, lon)?;
    let registry = ctx.registry();
    let sites = find_darker_sites(&registry, center, radius_km, limit);

    if sites.is_empty() {
        println!(
            "No darker sites within {} km of {} (or the coordinate is uncovered).",
            radius_km, center
        );
        return Ok(());
    }

    println!(
        "{} darker site(s) within {} km of {}:",
        sites.len(),
        radius_km,
        center
    );
    for site in &sites {
        let description = registry
            .resolve(site.coordinate)
            .and_then(|map| map.scale().description(site.level))
            .unwrap_or("");
        println!(
            "  {}  level {}  {:.1} km  {}",
            site.coordinate, site.level, site.distance_km, description
        );
    }

    Ok(())
}
