//! Ticket: the record tracked by the desk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A help-desk ticket. Fields are fixed once the ticket enters the
/// submission queue; the four small code fields index into the catalog's
/// option lists (product, status, category, priority), which are owned
/// outside this crate.
///
/// Tickets are cheap to clone and are held by value inside the structures
/// that store them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique, monotonically assigned identifier.
    pub id: i64,

    // ── Option codes ──
    pub product: usize,
    pub status: usize,
    pub category: usize,
    /// Lower numbers are more urgent.
    pub priority: usize,

    // ── Effort & schedule ──
    pub est_hours: i64,
    pub start_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,

    // ── Text & identity ──
    pub creator: String,
    pub title: String,
    pub description: String,
    pub assignee: String,
}
