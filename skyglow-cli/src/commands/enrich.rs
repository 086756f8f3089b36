//! `enrich` command: append pollution columns to a CSV dataset.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::commands::common::Context;
use crate::error::CliError;
use skyglow::enrich::{enrich_csv, enrich_csv_file, EnrichOptions, EnrichStats};

/// Arguments for one enrichment run.
pub struct EnrichArgs {
    pub input: PathBuf,
    /// Augmented CSV destination; stdout when absent
    pub output: Option<PathBuf>,
    pub lat_column: String,
    pub lon_column: String,
    pub sky_quality: bool,
    pub diagnostics: bool,
}

/// Run the enrich command.
pub fn run(ctx: &Context, args: EnrichArgs) -> Result<(), CliError> {
    let options = EnrichOptions {
        latitude_column: args.lat_column,
        longitude_column: args.lon_column,
        include_diagnostics: args.diagnostics,
        include_sky_quality: args.sky_quality,
    };

    let extractor = ctx.extractor();
    let stats = match &args.output {
        Some(output) => enrich_csv_file(&extractor, &args.input, output, &options)?,
        None => {
            let input = File::open(&args.input).map_err(skyglow::enrich::EnrichError::Io)?;
            enrich_csv(&extractor, input, io::stdout().lock(), &options)?
        }
    };

    report(&args.input, args.output.as_deref(), &stats);
    Ok(())
}

/// Print the run summary on stderr, keeping stdout clean for CSV output.
fn report(input: &Path, output: Option<&Path>, stats: &EnrichStats) {
    eprintln!(
        "Enriched {} of {} row(s) from {}",
        stats.enriched,
        stats.rows,
        input.display()
    );
    if stats.unresolved > 0 {
        eprintln!(
            "  {} row(s) received the sentinel index ({} malformed)",
            stats.unresolved, stats.malformed
        );
    }
    if let Some(output) = output {
        eprintln!("Wrote {}", output.display());
    }
}
