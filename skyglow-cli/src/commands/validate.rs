//! `validate` command: load every configured map and report problems.

use crate::commands::common::Context;
use crate::error::CliError;
use skyglow::registry::scan_maps_dir;

/// Run the validate command.
///
/// Loads every declared map (or just `--region <name>`), reports dimension
/// mismatches, and with `--audit` also checks each raster's colors against
/// its scale. Returns an error when any selected map cannot be loaded.
pub fn run(ctx: &Context, region: Option<&str>, audit: bool) -> Result<(), CliError> {
    let registry = ctx.registry();
    let maps_dir = &ctx.settings().maps.directory;

    if let Some(name) = region {
        if registry.spec(name).is_none() {
            return Err(CliError::InvalidArgument(format!(
                "no region named '{}' is configured",
                name
            )));
        }
    }

    println!("Maps directory: {}", maps_dir.display());

    let mut failed = 0;
    for spec in registry
        .specs()
        .iter()
        .filter(|s| region.is_none() || region == Some(s.name.as_str()))
    {
        match registry.get(&spec.name) {
            Some(map) => {
                let (width, height) = map.raster().dimensions();
                print!("  {}: ok, {}x{}", spec.name, width, height);
                match spec.expected_dimensions {
                    Some((ew, eh)) if (ew, eh) != (width, height) => {
                        print!(" (declared {}x{})", ew, eh);
                    }
                    _ => {}
                }
                println!();

                if audit {
                    let report = map.scale().audit(map.raster());
                    if report.is_clean() {
                        println!(
                            "    colors: clean, {} unique over {} pixel(s)",
                            report.unique_colors, report.total_pixels
                        );
                    } else {
                        println!(
                            "    colors: {} unexpected value(s), most frequent:",
                            report.unexpected.len()
                        );
                        for color in report.unexpected.iter().take(5) {
                            println!(
                                "      {:?} x{} (not in the {} scale)",
                                color.rgb,
                                color.count,
                                map.scale().name()
                            );
                        }
                    }
                }
            }
            None => {
                failed += 1;
                let reason = registry
                    .load_failures()
                    .into_iter()
                    .find(|(name, _)| name == &spec.name)
                    .map(|(_, reason)| reason)
                    .unwrap_or_else(|| "unknown failure".to_string());
                println!("  {}: FAILED - {}", spec.name, reason);
            }
        }
    }

    // Files following the naming convention but not declared in the config.
    if region.is_none() {
        let declared: Vec<_> = registry.specs().iter().map(|s| s.file.clone()).collect();
        let undeclared: Vec<_> = scan_maps_dir(maps_dir)
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .map(|name| !declared.iter().any(|d| d.as_os_str() == name))
                    .unwrap_or(false)
            })
            .collect();
        if !undeclared.is_empty() {
            println!("Undeclared map file(s) present:");
            for path in undeclared {
                println!("  {}", path.display());
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Validation { failed });
    }
    Ok(())
}
