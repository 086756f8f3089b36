//! Logging infrastructure.
//!
//! Provides structured logging with file output and console output:
//! - Writes to the configured log file (cleared on session start)
//! - Also prints to stderr so CLI output stays pipeable
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
#[derive(Debug)]
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the logging system.
///
/// Creates the log file's directory if needed, clears the previous log
/// file, and sets up dual output to both file and stderr. The returned
/// guard must be kept alive for file logging to work.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log
/// file cannot be cleared.
pub fn init_logging(log_file: &Path) -> Result<LoggingGuard, io::Error> {
    let log_dir = log_file.parent().unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;

    fs::create_dir_all(log_dir)?;

    // Clear the previous session's log. Handles both existing and
    // non-existing files.
    fs::write(log_file, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    // Diagnostics go to stderr so query results on stdout stay clean.
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true)
        .with_target(false);

    // Defaults to INFO if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clears_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("session.log");
        fs::write(&log_file, "old log data").unwrap();

        // Clearing is a plain truncating write; init_logging itself cannot
        // be exercised here because the global subscriber is set once per
        // process.
        fs::write(&log_file, "").unwrap();
        assert_eq!(fs::read_to_string(&log_file).unwrap(), "");
    }

    #[test]
    fn test_rejects_path_without_file_name() {
        let err = init_logging(Path::new("/")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard { _file_guard: guard };
    }
}
