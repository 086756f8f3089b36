//! `query` command: look up the index at one coordinate.

use crate::commands::common::{parse_coordinate, Context};
use crate::error::CliError;
use skyglow::{extract, sqm};

/// Run the query command.
///
/// Prints the bare index on stdout so the output stays scriptable;
/// `--details` adds the human-readable context.
pub fn run(ctx: &Context, lat: f64, lon: f64, details: bool) -> Result<(), CliError> {
    let coord = parse_coordinate(lat, lon)?;
    let extractor = ctx.extractor();
    let result = extractor.extract(coord);

    if !details {
        println!("{}", result.index);
        return Ok(());
    }

    println!("Coordinate: {}", coord);
    println!("Index: {}", result.index);

    if result.index == extract::UNKNOWN_INDEX {
        println!("No regional map covers this coordinate.");
        return Ok(());
    }

    let level = result.index as u8;
    if let Some(spec) = result
        .source_map
        .as_deref()
        .and_then(|name| extractor.registry().spec(name))
    {
        println!("Map: {} ({} scale)", spec.name, spec.scale.as_str());
        if let Some(description) = spec.scale.table().description(level) {
            println!("Sky: {}", description);
        }
        if let Some(quality) = sqm::for_level(spec.scale, level) {
            println!(
                "Brightness: {:.2} mag/arcsec\u{b2} average ({:.2} at darkest)",
                quality.avg_mpsa, quality.min_mpsa
            );
            println!(
                "Artificial/natural light ratio: {:.3} average",
                quality.avg_lpi
            );
        }
    }
    println!("Color match distance: {}", result.matched_color_distance);

    Ok(())
}
