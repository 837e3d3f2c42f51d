//! Checksummed delimited-record files.
//!
//! Each record file travels with two sidecars: a SHA-256 digest of the data
//! file's bytes and a last-saved timestamp. Reads verify the digest before
//! parsing; writes verify the previous contents, replace them, then refresh
//! both sidecars. A mismatch aborts the operation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{PersistError, io_error};

/// One delimited-record file plus its checksum and last-saved sidecars.
#[derive(Debug, Clone)]
pub struct RecordFile {
    name: String,
    data_path: PathBuf,
    checksum_path: PathBuf,
    stamp_path: PathBuf,
}

impl RecordFile {
    pub fn new(dir: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            data_path: dir.join(format!("{name}.csv")),
            checksum_path: dir.join(format!("{name}.checksum")),
            stamp_path: dir.join(format!("{name}.saved")),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Read all rows after verifying the checksum. A missing data file is
    /// an empty state (first run), not an error.
    pub fn read_rows(&self) -> Result<Vec<Vec<String>>, PersistError> {
        let bytes = match fs::read(&self.data_path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(io_error(&self.data_path, err)),
        };
        self.verify(&bytes)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        debug!(file = %self.name, rows = rows.len(), "record file read");
        Ok(rows)
    }

    /// Replace the file's contents with `rows`, then refresh the checksum
    /// and last-saved sidecars. An existing file must still match its
    /// checksum before it is overwritten.
    pub fn write_rows(&self, rows: &[Vec<String>]) -> Result<(), PersistError> {
        match fs::read(&self.data_path) {
            Ok(existing) => self.verify(&existing)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(io_error(&self.data_path, err)),
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.write_record(row)?;
        }
        let bytes = writer.into_inner().map_err(|err| PersistError::Io {
            path: self.data_path.display().to_string(),
            source: std::io::Error::other(err.to_string()),
        })?;

        fs::write(&self.data_path, &bytes).map_err(|err| io_error(&self.data_path, err))?;
        fs::write(&self.checksum_path, hex_digest(&bytes))
            .map_err(|err| io_error(&self.checksum_path, err))?;
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        fs::write(&self.stamp_path, stamp).map_err(|err| io_error(&self.stamp_path, err))?;

        debug!(file = %self.name, rows = rows.len(), "record file written");
        Ok(())
    }

    fn verify(&self, bytes: &[u8]) -> Result<(), PersistError> {
        let stored = match fs::read_to_string(&self.checksum_path) {
            Ok(stored) => stored,
            // A data file without its sidecar cannot be trusted.
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => return Err(io_error(&self.checksum_path, err)),
        };
        if stored.trim() != hex_digest(bytes) {
            return Err(PersistError::ChecksumMismatch {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Lowercase hex SHA-256 digest.
pub(crate) fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
