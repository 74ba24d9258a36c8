//! Per-run record of what the organizer did.
//!
//! A [`RunReport`] is threaded through one organize pass in place of shared
//! counters. It holds every move outcome and folder removal, and renders the
//! summary line written to the log.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Outcome of a single file move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved under its original name.
    Moved,
    /// Moved under a numbered name because the original was taken.
    Renamed,
    /// Left in place; the reason is the error message.
    Failed(String),
}

/// One file the organizer tried to place.
#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub source: PathBuf,
    /// Final path, or the intended folder when the move failed early.
    pub destination: PathBuf,
    /// Category or month folder the file was routed to.
    pub bucket: String,
    pub outcome: MoveOutcome,
}

impl MoveRecord {
    pub fn succeeded(&self) -> bool {
        !matches!(self.outcome, MoveOutcome::Failed(_))
    }
}

/// Everything that happened during one run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub records: Vec<MoveRecord>,
    /// Entries left alone by filter rules or the skip list.
    pub skipped: Vec<PathBuf>,
    pub removed_dirs: Vec<PathBuf>,
    pub removal_failures: Vec<(PathBuf, String)>,
}

impl RunReport {
    pub fn new(root: PathBuf, dry_run: bool) -> Self {
        Self {
            root,
            dry_run,
            ..Default::default()
        }
    }

    pub fn record(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Files that ended up in a destination folder, renamed or not.
    pub fn moved_count(&self) -> usize {
        self.records.iter().filter(|r| r.succeeded()).count()
    }

    pub fn renamed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == MoveOutcome::Renamed)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.records.len() - self.moved_count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn folders_removed(&self) -> usize {
        self.removed_dirs.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter().filter(|r| !r.succeeded())
    }

    /// Successful moves per destination folder, sorted by folder name.
    pub fn bucket_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in self.records.iter().filter(|r| r.succeeded()) {
            *counts.entry(record.bucket.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// The summary line written at the end of every run.
    pub fn summary(&self) -> String {
        let removed = self.folders_removed();
        format!(
            "Summary: {} moved ({} renamed), {} failed, {} {} removed",
            self.moved_count(),
            self.renamed_count(),
            self.failed_count(),
            removed,
            if removed == 1 { "folder" } else { "folders" }
        )
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(f, "[DRY RUN] ")?;
        }
        f.write_str(&self.summary())
    }
}
