//! organize - sort a directory's files into category or month folders
//!
//! This library classifies files by extension, moves the top-level files of a
//! directory into `Organized/<Category>/` or `Organized_by_Date/<YYYY-MM>/`
//! without ever overwriting, and optionally removes the empty folders left
//! behind. Filesystem access goes through the [`FileSystem`] trait so the
//! whole pass can run in memory.

pub mod cli;
pub mod config;
pub mod error;
pub mod file_category;
pub mod file_organizer;
pub mod filesystem;
pub mod logging;
pub mod output;
pub mod report;

pub use config::{CompiledFilters, ConfigError, FilterConfig};
pub use error::{Error, MoveError, Result};
pub use file_category::{Category, FileMapper};
pub use file_organizer::{OrganizeMode, Organizer};
pub use filesystem::{FileSystem, MemoryFs, RealFs};
pub use report::{MoveOutcome, MoveRecord, RunReport};

pub use cli::{Args, run_cli};
