//! Skyglow CLI - command-line interface.
//!
//! This binary provides a command-line interface to the skyglow library:
//! single-coordinate index lookups, CSV dataset enrichment, darker-site
//! search, and map validation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod error;

use commands::common::Context;
use commands::enrich::EnrichArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "skyglow")]
#[command(version = skyglow::VERSION)]
#[command(about = "Light-pollution index lookup from regional sky-brightness maps", long_about = None)]
struct Cli {
    /// Config file path (default: ~/.skyglow/config.ini)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the light-pollution index at a coordinate
    Query {
        /// Latitude in decimal degrees
        lat: f64,
        /// Longitude in decimal degrees
        lon: f64,
        /// Show the source map, sky description, and reference brightness
        #[arg(long)]
        details: bool,
    },

    /// Append light-pollution columns to a CSV of coordinates
    Enrich {
        /// Input CSV file
        input: PathBuf,
        /// Output CSV file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Header of the latitude column
        #[arg(long, default_value = "Latitude")]
        lat_column: String,
        /// Header of the longitude column
        #[arg(long, default_value = "Longitude")]
        lon_column: String,
        /// Also append the sky-quality reference columns
        #[arg(long)]
        sky_quality: bool,
        /// Also append source map and color match distance columns
        #[arg(long)]
        diagnostics: bool,
    },

    /// Find darker sites within a radius of a coordinate
    Search {
        /// Latitude in decimal degrees
        lat: f64,
        /// Longitude in decimal degrees
        lon: f64,
        /// Search radius in kilometers
        #[arg(long, default_value = "50")]
        radius_km: f64,
        /// Maximum number of sites to report
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Load every configured map and report problems
    Validate {
        /// Only validate the named region
        #[arg(long)]
        region: Option<String>,
        /// Also audit raster colors against each map's scale
        #[arg(long)]
        audit: bool,
    },

    /// List configured map regions
    Regions,

    /// Create the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Init writes the config file itself, before any settings are loaded.
    if let Commands::Init { force } = cli.command {
        return commands::init::run(cli.config.as_deref(), force);
    }

    let ctx = Context::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Query { lat, lon, details } => commands::query::run(&ctx, lat, lon, details),
        Commands::Enrich {
            input,
            output,
            lat_column,
            lon_column,
            sky_quality,
            diagnostics,
        } => commands::enrich::run(
            &ctx,
            EnrichArgs {
                input,
                output,
                lat_column,
                lon_column,
                sky_quality,
                diagnostics,
            },
        ),
        Commands::Search {
            lat,
            lon,
            radius_km,
            limit,
        } => commands::search::run(&ctx, lat, lon, radius_km, limit),
        Commands::Validate { region, audit } => {
            commands::validate::run(&ctx, region.as_deref(), audit)
        }
        Commands::Regions => commands::regions::run(&ctx),
        Commands::Init { .. } => unreachable!("handled above"),
    }
}
