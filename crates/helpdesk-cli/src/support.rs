//! Shared wiring for the command modules: archive/store/audit setup and
//! display-row rendering.

use std::path::Path;

use helpdesk_core::Ticket;
use helpdesk_persist::{Archive, ArchiveState, AuditLog};
use helpdesk_store::{Catalog, RecordStore};

use crate::config::Config;

/// The four audit channels the commands write to.
pub struct AuditTrails {
    pub general: AuditLog,
    pub users: AuditLog,
    pub tickets: AuditLog,
    pub submissions: AuditLog,
}

/// One command's working set: the hydrated store, its backing archive, and
/// the audit channels.
pub struct Workspace {
    pub store: RecordStore,
    pub archive: Archive,
    pub audit: AuditTrails,
}

/// Open the archive, hydrate the store, and open the audit channels; any
/// failure is fatal for the command.
pub fn open_workspace(config: &Config) -> Workspace {
    let archive = match Archive::open(&config.data_dir) {
        Ok(archive) => archive,
        Err(err) => fail(err),
    };
    let state = match archive.load() {
        Ok(state) => state,
        Err(err) => fail(err),
    };
    let store = RecordStore::from_parts(
        Catalog::with_products(state.products),
        state.tickets,
        state.submissions,
        state.users,
    );

    Workspace {
        store,
        archive,
        audit: open_trails(&config.log_dir),
    }
}

pub fn open_trails(log_dir: &Path) -> AuditTrails {
    AuditTrails {
        general: open_channel(log_dir, "general"),
        users: open_channel(log_dir, "users"),
        tickets: open_channel(log_dir, "tickets"),
        submissions: open_channel(log_dir, "submissions"),
    }
}

impl Workspace {
    /// Persist the store back to the archive.
    pub fn save(&self) {
        let state = ArchiveState {
            tickets: self.store.tickets_snapshot(),
            submissions: self.store.submissions_snapshot(),
            users: self.store.users_snapshot(),
            products: self.store.products(),
        };
        if let Err(err) = self.archive.save(&state) {
            fail(err)
        }
    }
}

/// Append one audit line; a tampered trail is fatal.
pub fn record(channel: &AuditLog, message: &str) {
    if let Err(err) = channel.append(message) {
        fail(err)
    }
}

fn open_channel(dir: &Path, name: &str) -> AuditLog {
    match AuditLog::open(dir, name) {
        Ok(log) => log,
        Err(err) => fail(err),
    }
}

/// Print `error: ...` on stderr and exit non-zero.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

/// Human lines for one ticket, option codes resolved against the catalog.
pub fn ticket_lines(ticket: &Ticket, catalog: &Catalog) -> Vec<String> {
    vec![
        format!("Title: {}", ticket.title),
        format!("Description: {}", ticket.description),
        format!("Creator: {}", ticket.creator),
        format!("Assignee: {}", ticket.assignee),
        format!("Estimated Hours to Complete: {}", ticket.est_hours),
        format!("Priority: {}", option_name(catalog.priority_name(ticket.priority))),
        format!("Start Date: {}", ticket.start_date.to_rfc3339()),
        format!("Due Date: {}", ticket.due_date.to_rfc3339()),
        format!("Product: {}", option_name(catalog.product_name(ticket.product))),
        format!("Status: {}", option_name(catalog.status_name(ticket.status))),
        format!("Category: {}", option_name(catalog.category_name(ticket.category))),
        format!("Ticket ID: {}", ticket.id),
    ]
}

/// One-line summary for list output.
pub fn ticket_summary(ticket: &Ticket, catalog: &Catalog) -> String {
    format!(
        "#{} [{} p{}] {} (creator {}, assignee {})",
        ticket.id,
        option_name(catalog.status_name(ticket.status)),
        ticket.priority,
        ticket.title,
        ticket.creator,
        ticket.assignee,
    )
}

/// JSON payload for one ticket.
pub fn ticket_json(ticket: &Ticket) -> serde_json::Value {
    serde_json::to_value(ticket).expect("json serialization")
}

/// Pretty-print a JSON payload to stdout.
pub fn emit_json(payload: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

fn option_name(name: Option<&str>) -> &str {
    name.unwrap_or("(unknown)")
}
