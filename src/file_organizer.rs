/// File organization: moving top-level files into category or month folders.
///
/// An [`Organizer`] runs one pass over a source directory. For each regular
/// file it picks a destination folder (by [`Category`] in type mode, by
/// `YYYY-MM` in date mode), creates the folder if needed, finds a free name
/// and moves the file. Optionally it then sweeps the source tree for empty
/// folders. Per-file problems are logged and recorded in the [`RunReport`];
/// only an unusable source directory aborts the run.
use crate::config::CompiledFilters;
use crate::error::{Error, MoveError, Result};
use crate::file_category::{Category, FileMapper};
use crate::filesystem::{FileEntry, FileSystem};
use crate::report::{MoveOutcome, MoveRecord, RunReport};
use chrono::{DateTime, Local};
use indicatif::ProgressBar;
use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Destination root for type mode.
pub const TYPE_ROOT: &str = "Organized";
/// Destination root for date mode.
pub const DATE_ROOT: &str = "Organized_by_Date";
/// Month folder for files whose timestamps cannot be read.
pub const UNKNOWN_DATE_BUCKET: &str = "Unknown";

/// How files are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OrganizeMode {
    /// One folder per file category.
    #[default]
    Type,
    /// One folder per creation month.
    Date,
}

impl OrganizeMode {
    /// Name of the folder, directly under the source, that receives the files.
    pub fn destination_root_name(&self) -> &'static str {
        match self {
            OrganizeMode::Type => TYPE_ROOT,
            OrganizeMode::Date => DATE_ROOT,
        }
    }
}

impl fmt::Display for OrganizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizeMode::Type => f.write_str("type"),
            OrganizeMode::Date => f.write_str("date"),
        }
    }
}

/// Month folder name for a timestamp, e.g. `2025-08`.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use organize::file_organizer::date_bucket;
///
/// let created = Local.with_ymd_and_hms(2025, 8, 9, 14, 30, 0).unwrap();
/// assert_eq!(date_bucket(Some(created)), "2025-08");
/// assert_eq!(date_bucket(None), "Unknown");
/// ```
pub fn date_bucket(created: Option<DateTime<Local>>) -> String {
    created
        .map(|timestamp| timestamp.format("%Y-%m").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE_BUCKET.to_string())
}

/// First free path for `file_name` inside `dir`.
///
/// Tries `name.ext`, then `name_1.ext`, `name_2.ext`, and so on until
/// `exists` reports a free slot. Only the final extension is kept apart, so
/// `backup.tar.gz` becomes `backup.tar_1.gz`. The name's bytes are kept as
/// they are, whether or not they are valid UTF-8.
pub fn unique_destination(
    dir: &Path,
    file_name: impl AsRef<OsStr>,
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    let file_name = file_name.as_ref();
    let candidate = dir.join(file_name);
    if !exists(&candidate) {
        return candidate;
    }

    let original = Path::new(file_name);
    let stem = original.file_stem().unwrap_or(file_name);
    let extension = original.extension();

    let mut counter: u64 = 1;
    loop {
        let mut numbered = stem.to_os_string();
        numbered.push(format!("_{}", counter));
        if let Some(extension) = extension {
            numbered.push(".");
            numbered.push(extension);
        }
        let candidate = dir.join(numbered);
        if !exists(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Organizes the top-level files of one directory.
pub struct Organizer<F: FileSystem> {
    fs: F,
    root: PathBuf,
    mapper: FileMapper,
    filters: CompiledFilters,
    skip_paths: Vec<PathBuf>,
    dry_run: bool,
    progress: ProgressBar,
}

impl<F: FileSystem> Organizer<F> {
    /// Creates an organizer for `root` with default filters.
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            mapper: FileMapper::default(),
            filters: CompiledFilters::default(),
            skip_paths: Vec::new(),
            dry_run: false,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_filters(mut self, filters: CompiledFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Never move the file at `path` (used for the log file).
    pub fn with_skip_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip_paths.push(path.into());
        self
    }

    /// When set, report what would happen without touching the disk.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Progress bar advanced once per file; hidden unless set.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    pub fn destination_root(&self, mode: OrganizeMode) -> PathBuf {
        self.root.join(mode.destination_root_name())
    }

    /// Runs a full pass: organize, optionally clean, then log the summary.
    ///
    /// Returns an error only when the source directory is missing or
    /// unreadable. Individual file failures end up in the report.
    pub fn run(&mut self, mode: OrganizeMode, clean: bool) -> Result<RunReport> {
        self.check_root()?;

        let mut report = RunReport::new(self.root.clone(), self.dry_run);
        info!(
            "Starting file organization in {} (mode: {}{})",
            self.root.display(),
            mode,
            if self.dry_run { ", dry run" } else { "" }
        );

        match mode {
            OrganizeMode::Type => self.organize_by_type(&mut report)?,
            OrganizeMode::Date => self.organize_by_date(&mut report)?,
        }

        if clean {
            self.clean_empty_folders(&mut report)?;
        }

        info!("{}", report);
        Ok(report)
    }

    /// Moves every top-level file into `Organized/<Category>/`.
    pub fn organize_by_type(&mut self, report: &mut RunReport) -> Result<()> {
        self.organize_pass(OrganizeMode::Type, report)
    }

    /// Moves every top-level file into `Organized_by_Date/<YYYY-MM>/`.
    pub fn organize_by_date(&mut self, report: &mut RunReport) -> Result<()> {
        self.organize_pass(OrganizeMode::Date, report)
    }

    /// Ensures a destination folder exists. Safe to call repeatedly.
    pub fn ensure_folder(&self, dir: &Path) -> std::result::Result<(), MoveError> {
        if self.dry_run || self.fs.is_dir(dir) {
            return Ok(());
        }
        self.fs
            .create_dir_all(dir)
            .map_err(|e| MoveError::DirectoryCreationFailed {
                path: dir.to_path_buf(),
                source: e,
            })?;
        debug!("Created folder {}", self.relative(dir).display());
        Ok(())
    }

    /// Category a file name would be filed under in type mode.
    pub fn classify(&self, file_name: &str) -> Category {
        self.mapper.classify(file_name)
    }

    /// Removes empty folders below the source, deepest first.
    ///
    /// The source itself and both destination roots are never removed or
    /// entered. A folder survives if anything other than removable folders
    /// is left in it, including files it cannot read.
    pub fn clean_empty_folders(&mut self, report: &mut RunReport) -> Result<()> {
        let protected = [
            self.destination_root(OrganizeMode::Type),
            self.destination_root(OrganizeMode::Date),
        ];
        let children = self.list_root()?;
        for child in children
            .iter()
            .filter(|entry| entry.is_dir() && !protected.contains(&entry.path))
        {
            self.sweep(&child.path, report);
        }
        Ok(())
    }

    fn check_root(&self) -> Result<()> {
        if self.fs.is_dir(&self.root) {
            return Ok(());
        }
        error!("Source directory {} does not exist!", self.root.display());
        Err(Error::InvalidRoot {
            path: self.root.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "not an existing directory"),
        })
    }

    fn list_root(&self) -> Result<Vec<FileEntry>> {
        self.fs.list_dir(&self.root).map_err(|e| {
            error!("Cannot read {}: {}", self.root.display(), e);
            Error::InvalidRoot {
                path: self.root.clone(),
                source: e,
            }
        })
    }

    /// Top-level regular files that pass the skip list and filters.
    fn scan(&self, report: &mut RunReport) -> Result<Vec<FileEntry>> {
        let mut files = Vec::new();
        for entry in self.list_root()? {
            if !entry.is_file() {
                continue;
            }
            if self.skip_paths.contains(&entry.path) || !self.filters.should_include(&entry.name) {
                debug!("Skipping {}", entry.name);
                report.skipped.push(entry.path);
                continue;
            }
            files.push(entry);
        }
        Ok(files)
    }

    fn organize_pass(&mut self, mode: OrganizeMode, report: &mut RunReport) -> Result<()> {
        let files = self.scan(report)?;
        let destination_root = self.destination_root(mode);
        if let Err(e) = self.ensure_folder(&destination_root) {
            // Each file retries the creation and records its own failure.
            warn!("{}", e);
        }

        self.progress.set_length(files.len() as u64);
        for entry in &files {
            let bucket = match mode {
                OrganizeMode::Type => self.classify(&entry.name).dir_name().to_string(),
                OrganizeMode::Date => date_bucket(entry.created),
            };
            let folder = destination_root.join(&bucket);
            let record = self.place(entry, &folder, bucket);
            report.record(record);
            self.progress.inc(1);
        }
        Ok(())
    }

    fn place(&self, entry: &FileEntry, folder: &Path, bucket: String) -> MoveRecord {
        match self.try_place(entry, folder) {
            Ok(destination) => {
                let renamed = destination.file_name() != Some(entry.file_name.as_os_str());
                let verb = if self.dry_run { "Would move" } else { "Moved" };
                if renamed {
                    info!(
                        "{} {} to {}/{} (renamed)",
                        verb,
                        entry.name,
                        bucket,
                        destination.file_name().unwrap_or_default().to_string_lossy()
                    );
                } else {
                    info!("{} {} to {}/", verb, entry.name, bucket);
                }
                MoveRecord {
                    source: entry.path.clone(),
                    destination,
                    bucket,
                    outcome: if renamed {
                        MoveOutcome::Renamed
                    } else {
                        MoveOutcome::Moved
                    },
                }
            }
            Err(e) => {
                error!("Error moving {}: {}", entry.name, e);
                MoveRecord {
                    source: entry.path.clone(),
                    destination: folder.join(&entry.file_name),
                    bucket,
                    outcome: MoveOutcome::Failed(e.to_string()),
                }
            }
        }
    }

    fn try_place(&self, entry: &FileEntry, folder: &Path) -> std::result::Result<PathBuf, MoveError> {
        if entry.file_name.is_empty() {
            return Err(MoveError::NoFileName(entry.path.clone()));
        }
        self.ensure_folder(folder)?;
        let destination = unique_destination(folder, &entry.file_name, |path| self.fs.exists(path));
        if !self.dry_run {
            self.fs
                .move_file(&entry.path, &destination)
                .map_err(|e| MoveError::FileMoveFailure {
                    from: entry.path.clone(),
                    to: destination.clone(),
                    source: e,
                })?;
        }
        Ok(destination)
    }

    /// Returns true when `dir` is gone (or would be, in a dry run).
    fn sweep(&self, dir: &Path, report: &mut RunReport) -> bool {
        let entries = match self.fs.list_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read folder {}: {}", self.relative(dir).display(), e);
                report.removal_failures.push((dir.to_path_buf(), e.to_string()));
                return false;
            }
        };

        let mut remaining = 0;
        for entry in &entries {
            if entry.is_dir() && self.sweep(&entry.path, report) {
                continue;
            }
            remaining += 1;
        }
        if remaining > 0 {
            return false;
        }

        if self.dry_run {
            info!("Would remove empty folder: {}", self.relative(dir).display());
            report.removed_dirs.push(dir.to_path_buf());
            return true;
        }

        match self.fs.remove_dir(dir) {
            Ok(()) => {
                info!("Removed empty folder: {}", self.relative(dir).display());
                report.removed_dirs.push(dir.to_path_buf());
                true
            }
            Err(e) => {
                warn!(
                    "Error removing folder {}: {}",
                    self.relative(dir).display(),
                    e
                );
                report.removal_failures.push((dir.to_path_buf(), e.to_string()));
                false
            }
        }
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFs;
    use chrono::TimeZone;

    const ROOT: &str = "/data";

    fn organizer(fs: MemoryFs) -> Organizer<MemoryFs> {
        Organizer::new(fs, ROOT)
    }

    fn path(rel: &str) -> PathBuf {
        Path::new(ROOT).join(rel)
    }

    #[test]
    fn test_unique_destination_prefers_original_name() {
        let dest = unique_destination(Path::new("/d"), "a.txt", |_| false);
        assert_eq!(dest, PathBuf::from("/d/a.txt"));
    }

    #[test]
    fn test_unique_destination_increments_until_free() {
        let taken = [PathBuf::from("/d/a.txt"), PathBuf::from("/d/a_1.txt")];
        let dest = unique_destination(Path::new("/d"), "a.txt", |p| taken.iter().any(|t| t == p));
        assert_eq!(dest, PathBuf::from("/d/a_2.txt"));

        let taken = [PathBuf::from("/d/notes")];
        let dest = unique_destination(Path::new("/d"), "notes", |p| taken.iter().any(|t| t == p));
        assert_eq!(dest, PathBuf::from("/d/notes_1"));

        let taken = [PathBuf::from("/d/backup.tar.gz")];
        let dest = unique_destination(Path::new("/d"), "backup.tar.gz", |p| {
            taken.iter().any(|t| t == p)
        });
        assert_eq!(dest, PathBuf::from("/d/backup.tar_1.gz"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unique_destination_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.txt");
        let taken = Path::new("/d").join(name);
        let dest = unique_destination(Path::new("/d"), name, |p| p == taken.as_path());
        assert_eq!(dest, Path::new("/d").join(OsStr::from_bytes(b"caf\xe9_1.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_move_unchanged() {
        use std::os::unix::ffi::OsStrExt;

        let first = OsStr::from_bytes(b"caf\xe9.txt");
        let second = OsStr::from_bytes(b"caf\xe8.txt");
        let fs = MemoryFs::with_root(ROOT);
        fs.add_file(Path::new(ROOT).join(first), None);
        fs.add_file(Path::new(ROOT).join(second), None);

        let mut organizer = organizer(fs);
        let report = organizer.run(OrganizeMode::Type, false).unwrap();

        let documents = path("Organized/Documents");
        assert!(organizer.filesystem().is_file(&documents.join(first)));
        assert!(organizer.filesystem().is_file(&documents.join(second)));
        assert_eq!(report.moved_count(), 2);
        assert_eq!(report.renamed_count(), 0);
    }

    #[test]
    fn test_date_bucket_formats_year_month() {
        let created = Local.with_ymd_and_hms(2025, 8, 9, 0, 0, 0).unwrap();
        assert_eq!(date_bucket(Some(created)), "2025-08");
        let created = Local.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(date_bucket(Some(created)), "1999-12");
    }

    #[test]
    fn test_ensure_folder_is_idempotent() {
        let fs = MemoryFs::with_root(ROOT);
        let organizer = organizer(fs);
        let folder = path("Organized/Images");

        organizer.ensure_folder(&folder).unwrap();
        let dirs_after_first = organizer.filesystem().dir_count();
        organizer.ensure_folder(&folder).unwrap();

        assert!(organizer.filesystem().is_dir(&folder));
        assert_eq!(organizer.filesystem().dir_count(), dirs_after_first);
    }

    #[test]
    fn test_type_mode_moves_files_into_categories() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_file(path("report.pdf"), None);
        fs.add_file(path("photo.PNG"), None);
        fs.add_file(path("notes"), None);
        fs.add_file(path("nested/inner.txt"), None);

        let mut organizer = organizer(fs);
        let report = organizer.run(OrganizeMode::Type, false).unwrap();

        let fs = organizer.filesystem();
        assert!(fs.is_file(&path("Organized/Documents/report.pdf")));
        assert!(fs.is_file(&path("Organized/Images/photo.PNG")));
        assert!(fs.is_file(&path("Organized/Others/notes")));
        // Subdirectories are not organized.
        assert!(fs.is_file(&path("nested/inner.txt")));
        assert_eq!(report.moved_count(), 3);
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_collision_keeps_both_files() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_file(path("a.txt"), None);
        let mut organizer = organizer(fs);
        organizer.run(OrganizeMode::Type, false).unwrap();

        // A second a.txt shows up and is organized into the same folder.
        organizer.filesystem().add_file(path("a.txt"), None);
        let report = organizer.run(OrganizeMode::Type, false).unwrap();

        let fs = organizer.filesystem();
        assert!(fs.is_file(&path("Organized/Documents/a.txt")));
        assert!(fs.is_file(&path("Organized/Documents/a_1.txt")));
        assert_eq!(report.renamed_count(), 1);
        assert_eq!(report.records[0].outcome, MoveOutcome::Renamed);
    }

    #[test]
    fn test_date_mode_uses_month_and_unknown_buckets() {
        let fs = MemoryFs::with_root(ROOT);
        let august = Local.with_ymd_and_hms(2025, 8, 9, 12, 0, 0).unwrap();
        fs.add_file(path("holiday.jpg"), Some(august));
        fs.add_file(path("mystery.bin"), None);

        let mut organizer = organizer(fs);
        let report = organizer.run(OrganizeMode::Date, false).unwrap();

        let fs = organizer.filesystem();
        assert!(fs.is_file(&path("Organized_by_Date/2025-08/holiday.jpg")));
        assert!(fs.is_file(&path("Organized_by_Date/Unknown/mystery.bin")));
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_folder_creation_failure_skips_only_that_file() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_file(path("photo.png"), None);
        fs.add_file(path("report.pdf"), None);
        fs.deny(path("Organized/Images"));

        let mut organizer = organizer(fs);
        let report = organizer.run(OrganizeMode::Type, false).unwrap();

        let fs = organizer.filesystem();
        assert!(fs.is_file(&path("photo.png")));
        assert!(fs.is_file(&path("Organized/Documents/report.pdf")));
        assert_eq!(report.moved_count(), 1);
        assert_eq!(report.failed_count(), 1);
        let failed = report.failures().next().unwrap();
        assert_eq!(failed.source, path("photo.png"));
        assert!(matches!(failed.outcome, MoveOutcome::Failed(ref reason) if reason.contains("permission denied")));
    }

    #[test]
    fn test_move_failure_is_recorded() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_file(path("locked.txt"), None);
        fs.deny(path("locked.txt"));

        let mut organizer = organizer(fs);
        let report = organizer.run(OrganizeMode::Type, false).unwrap();

        assert_eq!(report.failed_count(), 1);
        assert!(organizer.filesystem().is_file(&path("locked.txt")));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let fs = MemoryFs::with_root("/elsewhere");
        let mut organizer = organizer(fs);
        let result = organizer.run(OrganizeMode::Type, true);
        assert!(matches!(result, Err(Error::InvalidRoot { .. })));
    }

    #[test]
    fn test_skip_paths_and_os_files_stay() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_file(path("file_organizer.log"), None);
        fs.add_file(path(".DS_Store"), None);
        fs.add_file(path(".hidden"), None);
        fs.add_file(path("song.mp3"), None);

        let mut organizer = organizer(fs).with_skip_path(path("file_organizer.log"));
        let report = organizer.run(OrganizeMode::Type, false).unwrap();

        let fs = organizer.filesystem();
        assert!(fs.is_file(&path("file_organizer.log")));
        assert!(fs.is_file(&path(".DS_Store")));
        assert!(fs.is_file(&path("Organized/Others/.hidden")));
        assert!(fs.is_file(&path("Organized/Audio/song.mp3")));
        assert_eq!(report.skipped_count(), 2);
    }

    #[test]
    fn test_clean_removes_nested_empty_folders_bottom_up() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_dir(path("empty/deeper/deepest"));
        fs.add_file(path("keep/sub/file.txt"), None);
        fs.add_dir(path("keep/empty_child"));

        let mut organizer = organizer(fs);
        let mut report = RunReport::new(PathBuf::from(ROOT), false);
        organizer.clean_empty_folders(&mut report).unwrap();

        let fs = organizer.filesystem();
        assert!(!fs.exists(&path("empty")));
        assert!(fs.is_dir(&path("keep/sub")));
        assert!(!fs.exists(&path("keep/empty_child")));
        assert!(fs.is_dir(Path::new(ROOT)));
        // deepest, deeper, empty, empty_child
        assert_eq!(report.folders_removed(), 4);
        assert_eq!(report.removed_dirs[0], path("empty/deeper/deepest"));
    }

    #[test]
    fn test_clean_protects_destination_roots() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_dir(path("Organized/Images"));
        fs.add_dir(path("Organized_by_Date/2024-01"));

        let mut organizer = organizer(fs);
        let mut report = RunReport::new(PathBuf::from(ROOT), false);
        organizer.clean_empty_folders(&mut report).unwrap();

        let fs = organizer.filesystem();
        assert!(fs.is_dir(&path("Organized/Images")));
        assert!(fs.is_dir(&path("Organized_by_Date/2024-01")));
        assert_eq!(report.folders_removed(), 0);
    }

    #[test]
    fn test_clean_skips_folders_it_cannot_remove() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_dir(path("locked"));
        fs.add_dir(path("open"));
        fs.deny(path("locked"));

        let mut organizer = organizer(fs);
        let mut report = RunReport::new(PathBuf::from(ROOT), false);
        organizer.clean_empty_folders(&mut report).unwrap();

        let fs = organizer.filesystem();
        assert!(fs.is_dir(&path("locked")));
        assert!(!fs.exists(&path("open")));
        assert_eq!(report.removal_failures.len(), 1);
        assert_eq!(report.folders_removed(), 1);
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_file(path("report.pdf"), None);
        fs.add_file(path("Organized/Documents/report.pdf"), None);
        fs.add_dir(path("tmp/inner"));

        let mut organizer = organizer(fs).with_dry_run(true);
        let report = organizer.run(OrganizeMode::Type, true).unwrap();

        let fs = organizer.filesystem();
        assert!(fs.is_file(&path("report.pdf")));
        assert!(fs.is_dir(&path("tmp/inner")));
        assert_eq!(report.records[0].destination, path("Organized/Documents/report_1.pdf"));
        assert_eq!(report.records[0].outcome, MoveOutcome::Renamed);
        assert_eq!(report.folders_removed(), 2);
        assert!(report.dry_run);
    }

    #[test]
    fn test_progress_tracks_files() {
        let fs = MemoryFs::with_root(ROOT);
        fs.add_file(path("a.txt"), None);
        fs.add_file(path("b.txt"), None);
        let progress = ProgressBar::hidden();

        let mut organizer = organizer(fs).with_progress(progress.clone());
        organizer.run(OrganizeMode::Type, false).unwrap();

        assert_eq!(progress.position(), 2);
        assert_eq!(progress.length(), Some(2));
    }
}
