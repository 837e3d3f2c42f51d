use serde_json::json;

use crate::cli::QueueCommands;
use crate::config::Config;
use crate::support;

pub fn run(config: &Config, command: QueueCommands) {
    let workspace = support::open_workspace(config);

    match command {
        QueueCommands::List { json } => {
            let rows = workspace.store.list_submissions();
            let catalog = workspace.store.catalog_snapshot();
            if json {
                let items: Vec<_> = rows.iter().map(support::ticket_json).collect();
                support::emit_json(&json!({
                    "action": "queue.list",
                    "count": items.len(),
                    "items": items
                }));
            } else {
                println!("helpdesk queue list\n  Pending: {}", rows.len());
                for ticket in &rows {
                    println!("  - {}", support::ticket_summary(ticket, &catalog));
                }
            }
        }

        QueueCommands::Approve { json } => match workspace.store.approve_top() {
            Ok(ticket) => {
                support::record(
                    &workspace.audit.tickets,
                    &format!("Submission {} approved into the ticket log.", ticket.id),
                );
                workspace.save();
                if json {
                    support::emit_json(&json!({
                        "action": "queue.approve",
                        "ticket": support::ticket_json(&ticket)
                    }));
                } else {
                    println!("helpdesk queue approve\n  Approved: #{}", ticket.id);
                }
            }
            Err(err) => support::fail(err),
        },

        QueueCommands::Reject { json } => match workspace.store.reject_top() {
            Ok(ticket) => {
                support::record(
                    &workspace.audit.submissions,
                    &format!("Submission {} rejected.", ticket.id),
                );
                workspace.save();
                if json {
                    support::emit_json(&json!({
                        "action": "queue.reject",
                        "ticket": support::ticket_json(&ticket)
                    }));
                } else {
                    println!("helpdesk queue reject\n  Rejected: #{}", ticket.id);
                }
            }
            Err(err) => support::fail(err),
        },

        QueueCommands::Withdraw { id, json } => match workspace.store.withdraw_submission(id) {
            Some(ticket) => {
                support::record(
                    &workspace.audit.submissions,
                    &format!("Submission {} withdrawn from the queue.", ticket.id),
                );
                workspace.save();
                if json {
                    support::emit_json(&json!({
                        "action": "queue.withdraw",
                        "ticket": support::ticket_json(&ticket)
                    }));
                } else {
                    println!("helpdesk queue withdraw\n  Withdrawn: #{}", ticket.id);
                }
            }
            None => support::fail(format!("no queued submission with id {id}")),
        },
    }
}
