use helpdesk_core::TicketOrder;
use helpdesk_store::TicketFilter;
use serde_json::json;

use crate::cli::TicketCommands;
use crate::config::Config;
use crate::support;

pub fn run(config: &Config, command: TicketCommands) {
    let workspace = support::open_workspace(config);

    match command {
        TicketCommands::List {
            by,
            creator,
            assignee,
            json,
        } => {
            let order: TicketOrder = match by.parse() {
                Ok(order) => order,
                Err(err) => support::fail(err),
            };
            let rows = match (creator, assignee) {
                (Some(name), _) => workspace
                    .store
                    .list_tickets_by(order, &TicketFilter::Creator(name)),
                (None, Some(name)) => workspace
                    .store
                    .list_tickets_by(order, &TicketFilter::Assignee(name)),
                (None, None) => workspace.store.list_tickets(order),
            };
            let catalog = workspace.store.catalog_snapshot();

            if json {
                let items: Vec<_> = rows.iter().map(support::ticket_json).collect();
                support::emit_json(&json!({
                    "action": "tickets.list",
                    "orderedBy": order.as_str(),
                    "count": items.len(),
                    "items": items
                }));
            } else {
                println!(
                    "helpdesk tickets list\n  Ordered by: {}\n  Count: {}",
                    order.label(),
                    rows.len()
                );
                for ticket in &rows {
                    println!("  - {}", support::ticket_summary(ticket, &catalog));
                }
            }
        }

        TicketCommands::Show { id, json } => match workspace.store.find_ticket(id) {
            Some(ticket) => {
                if json {
                    support::emit_json(&json!({
                        "action": "tickets.show",
                        "ticket": support::ticket_json(&ticket)
                    }));
                } else {
                    let catalog = workspace.store.catalog_snapshot();
                    println!("helpdesk tickets show");
                    for line in support::ticket_lines(&ticket, &catalog) {
                        println!("  {line}");
                    }
                }
            }
            None => support::fail(format!("no logged ticket with id {id}")),
        },

        TicketCommands::Delete { id, json } => match workspace.store.delete_ticket(id) {
            Some(ticket) => {
                support::record(
                    &workspace.audit.tickets,
                    &format!("Ticket {} deleted from the log.", ticket.id),
                );
                workspace.save();
                if json {
                    support::emit_json(&json!({
                        "action": "tickets.delete",
                        "ticket": support::ticket_json(&ticket)
                    }));
                } else {
                    println!("helpdesk tickets delete\n  Deleted: #{}", ticket.id);
                }
            }
            None => support::fail(format!("no logged ticket with id {id}")),
        },

        TicketCommands::Views { json } => {
            let views = workspace.store.pivot_views();
            if json {
                let items: Vec<_> = views
                    .iter()
                    .map(|(order, rows)| {
                        json!({
                            "orderedBy": order.as_str(),
                            "ids": rows.iter().map(|t| t.id).collect::<Vec<_>>()
                        })
                    })
                    .collect();
                support::emit_json(&json!({
                    "action": "tickets.views",
                    "count": items.len(),
                    "views": items
                }));
            } else {
                println!("helpdesk tickets views\n  Views: {}", views.len());
                for (order, rows) in &views {
                    let ids: Vec<String> = rows.iter().map(|t| t.id.to_string()).collect();
                    println!("  - {}: [{}]", order.label(), ids.join(", "));
                }
            }
        }
    }
}
