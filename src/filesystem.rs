//! Filesystem access used by the organizer.
//!
//! The organizer only talks to the disk through [`FileSystem`], so the whole
//! classify/move/clean pipeline can run against [`MemoryFs`] in tests.

use chrono::{DateTime, Local};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What kind of item a directory entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, sockets, devices. Never moved or descended into.
    Other,
}

/// A directory entry read fresh during a scan.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Display form of the name; lossy for names that are not UTF-8.
    pub name: String,
    /// The name exactly as stored on disk.
    pub file_name: OsString,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Creation time, or modification time where creation is not reported.
    pub created: Option<DateTime<Local>>,
}

impl FileEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The filesystem operations the organizer needs.
pub trait FileSystem {
    fn is_dir(&self, path: &Path) -> bool;

    fn exists(&self, path: &Path) -> bool;

    /// Lists the immediate children of `path`, sorted by name.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<FileEntry>>;

    /// Creates `path` and any missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Moves a file. Never overwrites: callers probe for a free name first.
    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Removes an empty directory.
    fn remove_dir(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem, via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl RealFs {
    fn entry_timestamp(metadata: &fs::Metadata) -> Option<DateTime<Local>> {
        metadata
            .created()
            .or_else(|_| metadata.modified())
            .ok()
            .map(DateTime::<Local>::from)
    }

    /// Copy-then-delete for moves `rename` cannot do.
    fn copy_and_remove(from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to)?;
        if let Err(e) = fs::remove_file(from) {
            let _ = fs::remove_file(to);
            return Err(e);
        }
        Ok(())
    }
}

impl FileSystem for RealFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        // Broken symlinks still occupy the name.
        fs::symlink_metadata(path).is_ok()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<FileEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::Other
            };
            let created = entry
                .metadata()
                .ok()
                .and_then(|metadata| Self::entry_timestamp(&metadata));
            let file_name = entry.file_name();
            entries.push(FileEntry {
                name: file_name.to_string_lossy().into_owned(),
                file_name,
                path: entry.path(),
                kind,
                created,
            });
        }
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        match fs::rename(from, to) {
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => Self::copy_and_remove(from, to),
            result => result,
        }
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }
}

#[derive(Debug, Clone)]
enum MemoryNode {
    Dir,
    File { created: Option<DateTime<Local>> },
}

/// An in-memory directory tree.
///
/// Paths listed with [`MemoryFs::deny`] fail every mutating operation and
/// listing with `PermissionDenied`, which lets tests exercise the per-file
/// error paths.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, MemoryNode>>,
    denied: RefCell<HashSet<PathBuf>>,
}

impl MemoryFs {
    /// Creates a tree containing only `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let fs = Self::default();
        fs.nodes.borrow_mut().insert(root.into(), MemoryNode::Dir);
        fs
    }

    /// Adds a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, created: Option<DateTime<Local>>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), MemoryNode::File { created });
    }

    /// Adds a directory and its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes
                .entry(ancestor.to_path_buf())
                .or_insert(MemoryNode::Dir);
        }
    }

    /// Makes every operation on `path` fail with `PermissionDenied`.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.denied.borrow_mut().insert(path.into());
    }

    pub fn is_file(&self, path: &Path) -> bool {
        matches!(
            self.nodes.borrow().get(path),
            Some(MemoryNode::File { .. })
        )
    }

    /// Number of directory nodes, for checking nothing was created twice.
    pub fn dir_count(&self) -> usize {
        self.nodes
            .borrow()
            .values()
            .filter(|node| matches!(node, MemoryNode::Dir))
            .count()
    }

    fn check_allowed(&self, path: &Path) -> io::Result<()> {
        if self.denied.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file or directory: {}", path.display()),
        )
    }

    fn has_children(&self, path: &Path) -> bool {
        self.nodes
            .borrow()
            .keys()
            .any(|key| key.parent() == Some(path))
    }
}

impl FileSystem for MemoryFs {
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.borrow().get(path), Some(MemoryNode::Dir))
    }

    fn exists(&self, path: &Path) -> bool {
        self.nodes.borrow().contains_key(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<FileEntry>> {
        self.check_allowed(path)?;
        if !self.is_dir(path) {
            return Err(Self::not_found(path));
        }
        let nodes = self.nodes.borrow();
        let entries = nodes
            .iter()
            .filter(|(key, _)| key.parent() == Some(path))
            .map(|(key, node)| {
                let (kind, created) = match node {
                    MemoryNode::Dir => (EntryKind::Dir, None),
                    MemoryNode::File { created } => (EntryKind::File, *created),
                };
                let file_name = key.file_name().map(OsStr::to_os_string).unwrap_or_default();
                FileEntry {
                    name: file_name.to_string_lossy().into_owned(),
                    file_name,
                    path: key.clone(),
                    kind,
                    created,
                }
            })
            .collect();
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        for ancestor in path.ancestors() {
            self.check_allowed(ancestor)?;
            if self.is_file(ancestor) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} is a file", ancestor.display()),
                ));
            }
        }
        self.add_dir(path);
        Ok(())
    }

    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.check_allowed(from)?;
        self.check_allowed(to)?;
        if self.exists(to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }
        match to.parent() {
            Some(parent) if self.is_dir(parent) => {}
            _ => return Err(Self::not_found(to)),
        }
        let mut nodes = self.nodes.borrow_mut();
        match nodes.remove(from) {
            Some(node @ MemoryNode::File { .. }) => {
                nodes.insert(to.to_path_buf(), node);
                Ok(())
            }
            Some(node) => {
                nodes.insert(from.to_path_buf(), node);
                Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} is not a file", from.display()),
                ))
            }
            None => Err(Self::not_found(from)),
        }
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        self.check_allowed(path)?;
        if !self.is_dir(path) {
            return Err(Self::not_found(path));
        }
        if self.has_children(path) {
            return Err(io::Error::new(
                io::ErrorKind::DirectoryNotEmpty,
                format!("{} is not empty", path.display()),
            ));
        }
        self.nodes.borrow_mut().remove(path);
        Ok(())
    }
}
