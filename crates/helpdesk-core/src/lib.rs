//! # helpdesk-core
//!
//! The record structures at the heart of the tracker:
//! - [`Ticket`] and [`User`], the stored entities
//! - [`TicketTree`]: the height-balanced canonical ticket log, rebuildable
//!   ("pivotable") under twelve orderings
//! - [`SubmissionQueue`]: binary min-heap of submissions pending approval
//! - [`UserTable`]: fixed-bucket chained hash table of accounts
//!
//! Everything here is pure in-memory state: no I/O, no locking. The store
//! layer (`helpdesk-store`) adds the concurrency discipline on top, and
//! persistence lives in `helpdesk-persist`.

pub mod order;
pub mod queue;
pub mod table;
pub mod ticket;
pub mod tree;

pub use order::{OrderParseError, TicketOrder};
pub use queue::{QueueError, SubmissionQueue};
pub use table::{BUCKET_COUNT, User, UserTable};
pub use ticket::Ticket;
pub use tree::TicketTree;
