//! Error types for organize.
//!
//! Only [`Error`] ever reaches the caller. [`MoveError`] describes a single
//! file that could not be placed; it is logged and counted, never propagated.
//!
//! A run that reaches its summary exits 0, even when some files failed. The
//! non-zero codes in [`exit_codes`] are reserved for runs that never start:
//! an unusable directory (1), an invalid filter configuration (2) or a log
//! file that cannot be opened (3).

use std::path::PathBuf;
use thiserror::Error;

pub use crate::config::ConfigError;

/// Fatal errors that abort a run before any file is touched.
#[derive(Error, Debug)]
pub enum Error {
    /// The directory to organize is missing, not a directory, or unreadable.
    #[error("Cannot organize {}: {source}", path.display())]
    InvalidRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file could not be opened for appending.
    #[error("Cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-file failures. Recorded in the run report, the run continues.
#[derive(Error, Debug)]
pub enum MoveError {
    /// Failed to create a destination folder.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to move a file to its destination.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("{} has no file name component", .0.display())]
    NoFileName(PathBuf),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ROOT_ERROR: u8 = 1;
    pub const CONFIG_ERROR: u8 = 2;
    pub const LOG_ERROR: u8 = 3;
}

impl Error {
    /// Exit code the binary reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidRoot { .. } => exit_codes::ROOT_ERROR,
            Error::Config(_) => exit_codes::CONFIG_ERROR,
            Error::LogFile { .. } => exit_codes::LOG_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes_per_variant() {
        let root = Error::InvalidRoot {
            path: PathBuf::from("/missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(root.exit_code(), exit_codes::ROOT_ERROR);

        let config = Error::from(ConfigError::ConfigInvalid("bad".to_string()));
        assert_eq!(config.exit_code(), exit_codes::CONFIG_ERROR);
        assert_ne!(config.exit_code(), exit_codes::SUCCESS);

        let log = Error::LogFile {
            path: PathBuf::from("/read-only/file_organizer.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(log.exit_code(), exit_codes::LOG_ERROR);
    }

    #[test]
    fn test_move_error_display_names_both_paths() {
        let err = MoveError::FileMoveFailure {
            from: PathBuf::from("/src/a.txt"),
            to: PathBuf::from("/dst/a.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/src/a.txt"));
        assert!(message.contains("/dst/a.txt"));
        assert!(message.contains("denied"));
    }
}
