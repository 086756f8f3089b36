//! `init` command: create the default configuration file.

use std::path::Path;

use crate::error::CliError;
use skyglow::config::{config_file_path, Settings};

/// Run the init command.
///
/// Writes a commented default config, refusing to overwrite an existing
/// file unless `--force` is given. Runs before logging is configured, so
/// it reports on stdout only.
pub fn run(config_path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path);

    if path.exists() && !force {
        println!("Config already exists: {}", path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    Settings::default().save_to(&path)?;
    println!("Wrote default config: {}", path.display());
    println!("Place your map images in the configured maps directory.");

    Ok(())
}
