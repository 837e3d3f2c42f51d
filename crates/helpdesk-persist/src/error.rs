//! Error types for archive and audit operations.

use std::path::Path;

/// Errors raised while loading or saving persisted state.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Underlying file I/O failed.
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A data file no longer matches its checksum sidecar.
    #[error("integrity check failed for {name}: checksum mismatch")]
    ChecksumMismatch { name: String },

    /// The CSV layer rejected the file.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A row decoded from disk is not a valid record.
    #[error("{name} row {row}: {message}")]
    MalformedRecord {
        name: String,
        row: usize,
        message: String,
    },

    /// Another process holds the archive lock.
    #[error("archive lock busy: {path}")]
    LockBusy { path: String },
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> PersistError {
    PersistError::Io {
        path: path.display().to_string(),
        source,
    }
}
