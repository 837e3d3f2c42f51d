use serde_json::json;

use crate::cli::ProductCommands;
use crate::config::Config;
use crate::support;

pub fn run(config: &Config, command: ProductCommands) {
    let workspace = support::open_workspace(config);

    match command {
        ProductCommands::List { json } => {
            let products = workspace.store.products();
            if json {
                support::emit_json(&json!({
                    "action": "products.list",
                    "count": products.len(),
                    "items": products
                }));
            } else {
                println!("helpdesk products list\n  Count: {}", products.len());
                for (index, product) in products.iter().enumerate() {
                    println!("  [{index}] {product}");
                }
            }
        }

        ProductCommands::Add { name, json } => match workspace.store.add_product(&name) {
            Ok(index) => {
                support::record(
                    &workspace.audit.general,
                    &format!("Product added: {name} at index {index}."),
                );
                workspace.save();
                if json {
                    support::emit_json(&json!({
                        "action": "products.add",
                        "index": index,
                        "name": name
                    }));
                } else {
                    println!("helpdesk products add\n  Added: [{index}] {name}");
                }
            }
            Err(err) => support::fail(err),
        },

        ProductCommands::Rename { index, name, json } => {
            match workspace.store.rename_product(index, &name) {
                Ok(()) => {
                    support::record(
                        &workspace.audit.general,
                        &format!("Product {index} renamed to {name}."),
                    );
                    workspace.save();
                    if json {
                        support::emit_json(&json!({
                            "action": "products.rename",
                            "index": index,
                            "name": name
                        }));
                    } else {
                        println!("helpdesk products rename\n  Renamed: [{index}] {name}");
                    }
                }
                Err(err) => support::fail(err),
            }
        }

        ProductCommands::Remove { index, json } => match workspace.store.remove_product(index) {
            Ok(removed) => {
                support::record(
                    &workspace.audit.general,
                    &format!(
                        "Product removed: {} ({} tickets, {} submissions dropped).",
                        removed.name, removed.tickets_removed, removed.submissions_removed
                    ),
                );
                workspace.save();
                if json {
                    support::emit_json(&json!({
                        "action": "products.remove",
                        "name": removed.name,
                        "ticketsRemoved": removed.tickets_removed,
                        "submissionsRemoved": removed.submissions_removed
                    }));
                } else {
                    println!(
                        "helpdesk products remove\n  Removed: {}\n  Tickets dropped: {}\n  Submissions dropped: {}",
                        removed.name, removed.tickets_removed, removed.submissions_removed
                    );
                }
            }
            Err(err) => support::fail(err),
        },
    }
}
