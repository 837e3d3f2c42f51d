use helpdesk_persist::{Archive, ArchiveState};
use helpdesk_store::demo_store;
use serde_json::json;

use crate::config::Config;
use crate::hasher::SaltedSha256;
use crate::support;

pub fn run(config: &Config, json: bool) {
    let archive = match Archive::open(&config.data_dir) {
        Ok(archive) => archive,
        Err(err) => support::fail(err),
    };

    let store = demo_store(&SaltedSha256);
    let state = ArchiveState {
        tickets: store.tickets_snapshot(),
        submissions: store.submissions_snapshot(),
        users: store.users_snapshot(),
        products: store.products(),
    };
    if let Err(err) = archive.save(&state) {
        support::fail(err);
    }

    let trails = support::open_trails(&config.log_dir);
    support::record(&trails.general, "Demo state loaded into the archive.");
    support::record(&trails.tickets, "Demo mode: 4 tickets loaded into the log.");
    support::record(
        &trails.submissions,
        "Demo mode: 4 submissions loaded into the queue.",
    );
    support::record(&trails.users, "Demo mode: 3 accounts loaded (admin, user1, user2).");

    if json {
        support::emit_json(&json!({
            "action": "demo",
            "tickets": state.tickets.len(),
            "submissions": state.submissions.len(),
            "users": state.users.len(),
            "products": state.products.len()
        }));
    } else {
        println!(
            "helpdesk demo\n  Tickets: {}\n  Submissions: {}\n  Users: {}\n  Products: {}",
            state.tickets.len(),
            state.submissions.len(),
            state.users.len(),
            state.products.len()
        );
    }
}
