use std::path::PathBuf;

use thiserror::Error;

use crate::models::MIN_KEY_LENGTH;

/// Reasons a candidate key is refused. The operator may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("API key cannot be empty")]
    EmptyKey,

    #[error("API key seems too short ({length} characters, expected at least {min})", min = MIN_KEY_LENGTH)]
    TooShort { length: usize },
}

/// Failures while backing up or rewriting the target file.
#[derive(Debug, Error)]
pub enum EditError {
    /// Nothing to back up.
    #[error("cannot back up {}: file does not exist", .path.display())]
    SourceMissing { path: PathBuf },

    /// The target must be created by the setup step first.
    #[error(".env file not found: {}", .path.display())]
    TargetMissing { path: PathBuf },

    /// A backup with the same timestamp is already on disk.
    #[error("backup {} already exists", .path.display())]
    BackupExists { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EditError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EditError::Io { path: path.into(), source }
    }
}
