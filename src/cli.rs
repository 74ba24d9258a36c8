//! Command-line interface module for organize.
//!
//! Parses arguments, loads the filter configuration, resolves the target
//! directory and drives one [`Organizer`] run against the real filesystem.

use crate::config::FilterConfig;
use crate::error::{Error, Result};
use crate::file_organizer::{OrganizeMode, Organizer};
use crate::filesystem::RealFs;
use crate::logging::DEFAULT_LOG_FILE;
use crate::output::OutputFormatter;
use crate::report::RunReport;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

const EXIT_STATUS_HELP: &str = "\
Exit status:
  0  run completed (files that could not be moved are logged, not fatal)
  1  the directory to organize is missing or unreadable
  2  the filter configuration is invalid
  3  the log file cannot be opened";

/// Organize files automatically into category or month folders.
#[derive(Parser, Debug, Clone)]
#[command(name = "organize", version, about, after_help = EXIT_STATUS_HELP)]
pub struct Args {
    /// Directory to organize (default: ~/Downloads)
    pub directory: Option<PathBuf>,

    /// Organization mode: by type or by creation month
    #[arg(long, value_enum, default_value_t = OrganizeMode::Type)]
    pub mode: OrganizeMode,

    /// Remove empty folders after organizing
    #[arg(long)]
    pub clean: bool,

    /// Show what would happen without moving or removing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Filter configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to append the log
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Also print info-level log events to the terminal
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Arguments for organizing `directory` with every other option at its default.
    pub fn for_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
            mode: OrganizeMode::Type,
            clean: false,
            dry_run: false,
            config: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            verbose: false,
        }
    }

    /// The directory to organize, falling back to the Downloads folder.
    pub fn target_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(default_directory)
    }
}

/// The user's Downloads folder.
pub fn default_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("Downloads"))
}

/// Runs one organization pass as described by `args`.
///
/// Fails only when the target directory cannot be used or the configuration
/// is invalid; per-file problems are in the returned report.
pub fn run_cli(args: &Args) -> Result<RunReport> {
    let target = args.target_directory();
    let root = fs::canonicalize(&target).map_err(|e| Error::InvalidRoot {
        path: target.clone(),
        source: e,
    })?;

    let filters = FilterConfig::load(args.config.as_deref())?.compile()?;

    OutputFormatter::banner(&root, args.mode, args.dry_run);

    let progress = OutputFormatter::create_progress_bar(0);
    let mut organizer = Organizer::new(RealFs, root)
        .with_filters(filters)
        .with_dry_run(args.dry_run)
        .with_progress(progress.clone());
    // The log may live inside the directory being organized.
    if let Ok(log_path) = fs::canonicalize(&args.log_file) {
        organizer = organizer.with_skip_path(log_path);
    }

    let result = organizer.run(args.mode, args.clean);
    progress.finish_and_clear();
    let report = result?;

    OutputFormatter::report(&report, &args.log_file);
    Ok(report)
}
