//! Batch dataset enrichment.
//!
//! Iterates a CSV dataset of observations, extracts the light-pollution
//! index for each row's coordinates, and appends the result as new columns.
//! Rows that cannot be resolved (missing, unparsable, or out-of-range
//! coordinates) receive the sentinel index; a single bad row never aborts
//! the batch. All input columns pass through untouched.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::coord::Coordinate;
use crate::extract::{IndexExtractor, LightPollutionResult};
use crate::sqm;

/// Appended column carrying the classified index.
pub const INDEX_COLUMN: &str = "LightPollutionIndex";
/// Appended diagnostic column naming the source region.
pub const SOURCE_MAP_COLUMN: &str = "SourceMap";
/// Appended diagnostic column with the squared color-match distance.
pub const MATCH_DISTANCE_COLUMN: &str = "MatchDistance";
/// Appended sky-quality columns (see [`crate::sqm`]).
pub const SKY_QUALITY_COLUMNS: [&str; 4] = ["min_mpsa", "avg_mpsa", "min_lpi", "avg_lpi"];

/// Errors that can abort an enrichment run.
///
/// Only structural problems abort: unreadable input, unwritable output, or
/// a dataset without the declared coordinate columns. Per-row problems
/// degrade to the sentinel index instead.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// CSV read/write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is missing a required coordinate column
    #[error("dataset has no '{column}' column")]
    MissingColumn { column: String },
}

/// Options controlling an enrichment run.
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    /// Header of the latitude column
    pub latitude_column: String,
    /// Header of the longitude column
    pub longitude_column: String,
    /// Also append [`SOURCE_MAP_COLUMN`] and [`MATCH_DISTANCE_COLUMN`]
    pub include_diagnostics: bool,
    /// Also append the four sky-quality reference columns
    pub include_sky_quality: bool,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            latitude_column: "Latitude".to_string(),
            longitude_column: "Longitude".to_string(),
            include_diagnostics: false,
            include_sky_quality: false,
        }
    }
}

/// Counters summarizing an enrichment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    /// Data rows read
    pub rows: u64,
    /// Rows that received a real index
    pub enriched: u64,
    /// Rows that received the sentinel index
    pub unresolved: u64,
    /// Malformed rows written through without enrichment columns parsed
    /// (wrong field count); they still carry the sentinel index
    pub malformed: u64,
}

/// Enrich a CSV stream, writing the augmented rows to `output`.
pub fn enrich_csv<R: Read, W: Write>(
    extractor: &IndexExtractor,
    input: R,
    output: W,
    options: &EnrichOptions,
) -> Result<EnrichStats, EnrichError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == options.latitude_column)
        .ok_or_else(|| EnrichError::MissingColumn {
            column: options.latitude_column.clone(),
        })?;
    let lon_idx = headers
        .iter()
        .position(|h| h == options.longitude_column)
        .ok_or_else(|| EnrichError::MissingColumn {
            column: options.longitude_column.clone(),
        })?;

    let mut out_headers = headers.clone();
    out_headers.push_field(INDEX_COLUMN);
    if options.include_diagnostics {
        out_headers.push_field(SOURCE_MAP_COLUMN);
        out_headers.push_field(MATCH_DISTANCE_COLUMN);
    }
    if options.include_sky_quality {
        for column in SKY_QUALITY_COLUMNS {
            out_headers.push_field(column);
        }
    }
    writer.write_record(&out_headers)?;

    let mut stats = EnrichStats::default();
    for record in reader.records() {
        let record = record?;
        stats.rows += 1;

        let malformed = record.len() != headers.len();
        if malformed {
            stats.malformed += 1;
            warn!(row = stats.rows, fields = record.len(), "malformed row, writing sentinel");
        }

        let result = if malformed {
            LightPollutionResult::unknown()
        } else {
            match parse_coordinate(&record, lat_idx, lon_idx) {
                Some(coord) => extractor.extract(coord),
                None => {
                    debug!(row = stats.rows, "unparsable or out-of-range coordinates");
                    LightPollutionResult::unknown()
                }
            }
        };

        if result.is_known() {
            stats.enriched += 1;
        } else {
            stats.unresolved += 1;
        }

        let mut out = record.clone();
        // Pad short rows so appended columns stay aligned with the header.
        while out.len() < headers.len() {
            out.push_field("");
        }
        out.push_field(&result.index.to_string());
        if options.include_diagnostics {
            out.push_field(result.source_map.as_deref().unwrap_or(""));
            if result.is_known() {
                out.push_field(&result.matched_color_distance.to_string());
            } else {
                out.push_field("");
            }
        }
        if options.include_sky_quality {
            push_sky_quality(&mut out, extractor, &result);
        }
        writer.write_record(&out)?;
    }

    writer.flush()?;
    Ok(stats)
}

/// Enrich a CSV file on disk, writing the augmented dataset to `output`.
pub fn enrich_csv_file(
    extractor: &IndexExtractor,
    input: &Path,
    output: &Path,
    options: &EnrichOptions,
) -> Result<EnrichStats, EnrichError> {
    let reader = File::open(input)?;
    let writer = File::create(output)?;
    enrich_csv(extractor, reader, writer, options)
}

fn parse_coordinate(record: &csv::StringRecord, lat_idx: usize, lon_idx: usize) -> Option<Coordinate> {
    let lat: f64 = record.get(lat_idx)?.trim().parse().ok()?;
    let lon: f64 = record.get(lon_idx)?.trim().parse().ok()?;
    Coordinate::new(lat, lon).ok()
}

fn push_sky_quality(
    out: &mut csv::StringRecord,
    extractor: &IndexExtractor,
    result: &LightPollutionResult,
) {
    let quality = result
        .source_map
        .as_deref()
        .and_then(|name| extractor.registry().spec(name))
        .filter(|_| result.is_known())
        .and_then(|spec| sqm::for_level(spec.scale, result.index as u8));

    match quality {
        Some(q) => {
            out.push_field(&q.min_mpsa.to_string());
            out.push_field(&q.avg_mpsa.to_string());
            out.push_field(&q.min_lpi.to_string());
            out.push_field(&q.avg_lpi.to_string());
        }
        None => {
            for _ in SKY_QUALITY_COLUMNS {
                out.push_field("");
            }
        }
    }
}
