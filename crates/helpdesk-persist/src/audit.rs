//! Tamper-evident audit trails.
//!
//! Each channel is an append-only text log paired with a SHA-256 checksum
//! sidecar. Every append verifies the trail first, writes one timestamped
//! line, and refreshes the checksum; a mismatch aborts the append.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::error::{PersistError, io_error};
use crate::record_file::hex_digest;

/// One named audit channel.
pub struct AuditLog {
    name: String,
    log_path: PathBuf,
    checksum_path: PathBuf,
}

impl AuditLog {
    /// Open the named channel under `dir`, creating an empty verified trail
    /// on first use. An existing trail must pass its checksum.
    pub fn open(dir: impl AsRef<Path>, name: &str) -> Result<Self, PersistError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|err| io_error(dir, err))?;
        let log = Self {
            name: name.to_string(),
            log_path: dir.join(format!("{name}.log")),
            checksum_path: dir.join(format!("{name}.checksum")),
        };

        if log.log_path.exists() {
            log.read_verified()?;
        } else {
            fs::write(&log.log_path, b"").map_err(|err| io_error(&log.log_path, err))?;
            log.write_checksum(b"")?;
        }
        Ok(log)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Verify the trail, append one timestamped line, refresh the checksum.
    pub fn append(&self, message: &str) -> Result<(), PersistError> {
        let mut contents = self.read_verified()?;
        let line = format!(
            "[{}] {}: {message}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            self.name
        );
        contents.extend_from_slice(line.as_bytes());

        fs::write(&self.log_path, &contents).map_err(|err| io_error(&self.log_path, err))?;
        self.write_checksum(&contents)?;
        debug!(channel = %self.name, message, "audit line recorded");
        Ok(())
    }

    /// All recorded lines, oldest first.
    pub fn lines(&self) -> Result<Vec<String>, PersistError> {
        let bytes = self.read_verified()?;
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn read_verified(&self) -> Result<Vec<u8>, PersistError> {
        let bytes = fs::read(&self.log_path).map_err(|err| io_error(&self.log_path, err))?;
        let stored = match fs::read_to_string(&self.checksum_path) {
            Ok(stored) => stored,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => return Err(io_error(&self.checksum_path, err)),
        };
        if stored.trim() != hex_digest(&bytes) {
            return Err(PersistError::ChecksumMismatch {
                name: self.name.clone(),
            });
        }
        Ok(bytes)
    }

    fn write_checksum(&self, bytes: &[u8]) -> Result<(), PersistError> {
        fs::write(&self.checksum_path, hex_digest(bytes))
            .map_err(|err| io_error(&self.checksum_path, err))
    }
}
