//! # helpdesk-store
//!
//! The record store service over `helpdesk-core`:
//! - [`RecordStore`]: the shared in-memory state (canonical ticket log,
//!   submission queue, user table and option catalog), each structure
//!   behind its own single-writer/multi-reader lock
//! - view building: pivoted and filtered copies of the log, fanned out one
//!   traversal per view and joined before returning
//! - validation that runs before any structure is touched
//! - the [`CredentialHasher`] seam for the external hashing capability
//!
//! Persistence lives in `helpdesk-persist`; this crate never does I/O.

pub mod auth;
pub mod catalog;
pub mod demo;
pub mod error;
pub mod store;
pub mod validate;
pub mod views;

pub use auth::CredentialHasher;
pub use catalog::Catalog;
pub use demo::demo_store;
pub use error::{AuthError, CatalogError, UserError, ValidationError};
pub use store::{RecordStore, RemovedProduct, SignupRequest, UserEdit};
pub use validate::TicketDraft;
pub use views::TicketFilter;
