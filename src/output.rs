//! Output formatting and styling module.
//!
//! Console output is a courtesy: banners, a progress bar and a summary
//! table. The log file is the actual record of what happened.

use crate::file_organizer::OrganizeMode;
use crate::report::RunReport;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::Path;

/// Manages all CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a dry-run notice.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Start-of-run banner.
    pub fn banner(root: &Path, mode: OrganizeMode, dry_run: bool) {
        Self::info(&format!("Starting file organization in: {}", root.display()));
        Self::info(&format!("Organization mode: {}", mode));
        if dry_run {
            Self::dry_run_notice("No files will be moved or removed.");
        }
    }

    /// Creates a progress bar for the organize pass.
    ///
    /// The length is set by the organizer once the scan is done.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints moved files per destination folder.
    pub fn summary_table(bucket_counts: &BTreeMap<String, usize>, total_files: usize) {
        Self::header("SUMMARY");

        let width = bucket_counts
            .keys()
            .map(|name| name.len())
            .max()
            .unwrap_or(0)
            .max(6); // "Folder"

        println!("{:<width$} | {}", "Folder".bold(), "Files".bold(), width = width);
        println!("{}", "-".repeat(width + 10));

        for (bucket, count) in bucket_counts {
            println!(
                "{:<width$} | {} {}",
                bucket,
                count.to_string().green(),
                plural(*count, "file", "files"),
                width = width
            );
        }

        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total_files.to_string().green().bold(),
            plural(total_files, "file", "files"),
            width = width
        );
    }

    /// End-of-run summary: table, failures, cleanup, and where the log is.
    pub fn report(report: &RunReport, log_path: &Path) {
        if report.records.is_empty() {
            Self::warning("No files found to organize.");
        } else {
            Self::summary_table(&report.bucket_counts(), report.moved_count());
        }

        if report.renamed_count() > 0 {
            Self::info(&format!(
                "{} {} renamed to avoid overwriting existing files",
                report.renamed_count(),
                plural(report.renamed_count(), "file was", "files were")
            ));
        }

        for failed in report.failures() {
            Self::error(&format!("Could not move {}", failed.source.display()));
        }

        if report.folders_removed() > 0 || !report.removal_failures.is_empty() {
            Self::info(&format!(
                "Removed {} empty {}",
                report.folders_removed(),
                plural(report.folders_removed(), "folder", "folders")
            ));
        }
        for (path, reason) in &report.removal_failures {
            Self::warning(&format!("Could not remove {}: {}", path.display(), reason));
        }

        if report.dry_run {
            Self::dry_run_notice(&report.summary());
        } else if report.failed_count() > 0 {
            Self::warning("Some files could not be organized. Please review errors above.");
        } else {
            Self::success("File organization complete!");
        }
        Self::plain(&format!(
            "Check {} for detailed information",
            log_path.display()
        ));
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "file", "files"), "file");
        assert_eq!(plural(0, "file", "files"), "files");
        assert_eq!(plural(3, "folder", "folders"), "folders");
    }

    #[test]
    fn test_progress_bar_length() {
        let pb = OutputFormatter::create_progress_bar(5);
        assert_eq!(pb.length(), Some(5));
    }
}
