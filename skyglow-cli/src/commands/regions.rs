//! `regions` command: list configured map regions.

use crate::commands::common::Context;
use crate::error::CliError;

/// Run the regions command.
pub fn run(ctx: &Context) -> Result<(), CliError> {
    let registry = ctx.registry();

    println!("Maps directory: {}", ctx.settings().maps.directory.display());
    println!();

    for spec in registry.specs() {
        let status = if registry.is_loaded(&spec.name) {
            "loaded"
        } else {
            "not loaded"
        };
        println!("{} ({})", spec.name, status);
        println!("  file: {}", spec.file.display());
        println!("  bounds: {}", spec.bounds);
        println!(
            "  scale: {}, priority: {}{}",
            spec.scale.as_str(),
            spec.priority,
            if spec.fallback { ", fallback" } else { "" }
        );
        if let Some((width, height)) = spec.expected_dimensions {
            println!("  declared dimensions: {}x{}", width, height);
        }
    }

    Ok(())
}
