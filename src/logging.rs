//! Log setup.
//!
//! Every event goes to an append-only log file, one timestamped line each.
//! The terminal only sees warnings and errors unless `--verbose` is given.
//! `RUST_LOG` overrides the default `info` level.

use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Log file name used when none is given on the command line.
pub const DEFAULT_LOG_FILE: &str = "file_organizer.log";

/// Opens `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::LogFile {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Plain-text layer writing `<local rfc3339> LEVEL message` lines to `file`.
pub fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_timer(ChronoLocal::rfc_3339())
}

/// A subscriber that only writes `info` and above to `file`.
///
/// Handy for scoping a run's log with `tracing::subscriber::with_default`.
pub fn file_subscriber(file: File) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(file_layer(file))
}

/// Installs the global subscriber: log file plus terminal warnings.
pub fn init_logging(log_path: &Path, verbose: bool) -> Result<()> {
    let file = open_log_file(log_path)?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_level);

    // Already set when called twice in one process; keep the first.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer(file))
        .with(console)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_is_appended() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join(DEFAULT_LOG_FILE);

        for message in ["first run", "second run"] {
            let file = open_log_file(&log_path).unwrap();
            tracing::subscriber::with_default(file_subscriber(file), || {
                tracing::info!("{}", message);
                tracing::debug!("not written");
            });
        }

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO") && lines[0].ends_with("first run"));
        assert!(lines[1].ends_with("second run"));
        // Lines start with a date, e.g. 2025-08-09T...
        assert!(lines[0].chars().take(4).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_open_log_file_in_missing_directory_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = open_log_file(&temp_dir.path().join("missing/organize.log"));
        assert!(matches!(result, Err(Error::LogFile { .. })));
    }
}
