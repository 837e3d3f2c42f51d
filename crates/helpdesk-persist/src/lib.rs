//! # helpdesk-persist
//!
//! Durable storage for the record store's state:
//! - [`RecordFile`]: checksummed delimited-record files
//! - [`Archive`]: the four record files (tickets, submissions, products,
//!   users) under one data directory, guarded by an exclusive per-archive
//!   lock
//! - [`AuditLog`]: tamper-evident append-only trails
//!
//! Integrity failures are fatal for the affected operation: a checksum
//! mismatch aborts the load or save instead of continuing silently.

pub mod archive;
pub mod audit;
pub mod codec;
pub mod error;
pub mod record_file;

pub use archive::{Archive, ArchiveState};
pub use audit::AuditLog;
pub use error::PersistError;
pub use record_file::RecordFile;
