use helpdesk_store::TicketDraft;
use serde_json::json;

use crate::config::Config;
use crate::support;

pub struct Args {
    pub title: String,
    pub description: String,
    pub creator: String,
    pub assignee: String,
    pub product: usize,
    pub status: usize,
    pub category: usize,
    pub priority: usize,
    pub est_hours: i64,
    pub due_in_days: i64,
    pub json: bool,
}

pub fn run(config: &Config, args: Args) {
    let workspace = support::open_workspace(config);
    let creator = args.creator.clone();

    let draft = TicketDraft {
        title: args.title,
        description: args.description,
        creator: args.creator,
        assignee: args.assignee,
        product: args.product,
        status: args.status,
        category: args.category,
        priority: args.priority,
        est_hours: args.est_hours,
        due_in_days: args.due_in_days,
    };

    match workspace.store.submit(draft) {
        Ok(id) => {
            support::record(
                &workspace.audit.submissions,
                &format!("Ticket {id} submitted by {creator}."),
            );
            workspace.save();
            if args.json {
                support::emit_json(&json!({ "action": "submit", "id": id }));
            } else {
                println!("helpdesk submit\n  Queued: #{id}");
            }
        }
        Err(err) => {
            support::record(
                &workspace.audit.submissions,
                &format!("Rejected submission from {creator}: {err}."),
            );
            support::fail(err);
        }
    }
}
