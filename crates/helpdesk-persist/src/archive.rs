//! Full-state archive: the four record files under one data directory.
//!
//! Every load or save holds an exclusive dot-lock scoped to this archive,
//! independent of the in-memory locks in the store layer. Integrity
//! failures abort the whole operation.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use helpdesk_core::{SubmissionQueue, TicketTree, UserTable};
use tracing::{debug, info};

use crate::codec;
use crate::error::{PersistError, io_error};
use crate::record_file::RecordFile;

/// The in-memory state an archive loads to and saves from.
#[derive(Debug, Default)]
pub struct ArchiveState {
    pub tickets: TicketTree,
    pub submissions: SubmissionQueue,
    pub users: UserTable,
    pub products: Vec<String>,
}

pub struct Archive {
    dir: PathBuf,
    tickets: RecordFile,
    submissions: RecordFile,
    products: RecordFile,
    users: RecordFile,
}

impl Archive {
    /// Open the archive directory, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, PersistError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|err| io_error(&dir, err))?;
        Ok(Self {
            tickets: RecordFile::new(&dir, "tickets"),
            submissions: RecordFile::new(&dir, "submissions"),
            products: RecordFile::new(&dir, "products"),
            users: RecordFile::new(&dir, "users"),
            dir,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the full persisted state, holding the archive lock for the
    /// whole read. The ticket log is rebuilt in id order.
    pub fn load(&self) -> Result<ArchiveState, PersistError> {
        let _guard = ArchiveLockGuard::acquire(&self.dir)?;

        let mut tickets = TicketTree::default();
        for (row_no, row) in self.tickets.read_rows()?.iter().enumerate() {
            tickets.insert(codec::ticket_from_row(self.tickets.name(), row_no + 1, row)?);
        }

        let mut submissions = SubmissionQueue::new();
        for (row_no, row) in self.submissions.read_rows()?.iter().enumerate() {
            submissions.push(codec::ticket_from_row(
                self.submissions.name(),
                row_no + 1,
                row,
            )?);
        }

        let mut users = UserTable::new();
        for (row_no, row) in self.users.read_rows()?.iter().enumerate() {
            users.insert(codec::user_from_row(self.users.name(), row_no + 1, row)?);
        }

        let products = self
            .products
            .read_rows()?
            .into_iter()
            .filter_map(|row| row.into_iter().next())
            .collect();

        debug!(dir = %self.dir.display(), "archive loaded");
        Ok(ArchiveState {
            tickets,
            submissions,
            users,
            products,
        })
    }

    /// Save the full state, replacing the archive's previous contents.
    /// Tickets are written in in-order traversal, submissions in storage
    /// order.
    pub fn save(&self, state: &ArchiveState) -> Result<(), PersistError> {
        let _guard = ArchiveLockGuard::acquire(&self.dir)?;

        let ticket_rows: Vec<Vec<String>> = state.tickets.iter().map(codec::ticket_to_row).collect();
        self.tickets.write_rows(&ticket_rows)?;

        let submission_rows: Vec<Vec<String>> =
            state.submissions.iter().map(codec::ticket_to_row).collect();
        self.submissions.write_rows(&submission_rows)?;

        let user_rows: Vec<Vec<String>> = state.users.iter().map(codec::user_to_row).collect();
        self.users.write_rows(&user_rows)?;

        let product_rows: Vec<Vec<String>> = state
            .products
            .iter()
            .map(|product| vec![product.clone()])
            .collect();
        self.products.write_rows(&product_rows)?;

        info!(dir = %self.dir.display(), "archive saved");
        Ok(())
    }
}

/// Exclusive dot-lock over one archive directory. Created with
/// create-new semantics and removed on drop; a present lock file means
/// another load or save is in flight.
struct ArchiveLockGuard {
    lock_path: PathBuf,
    _file: File,
}

impl ArchiveLockGuard {
    fn acquire(dir: &Path) -> Result<Self, PersistError> {
        let lock_path = dir.join(".lock");
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
        {
            Ok(mut file) => {
                let _ = writeln!(
                    file,
                    "pid={}\nutc={}",
                    std::process::id(),
                    Utc::now().to_rfc3339()
                );
                Ok(Self {
                    lock_path,
                    _file: file,
                })
            }
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(PersistError::LockBusy {
                    path: lock_path.display().to_string(),
                })
            }
            Err(err) => Err(io_error(&lock_path, err)),
        }
    }
}

impl Drop for ArchiveLockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}
