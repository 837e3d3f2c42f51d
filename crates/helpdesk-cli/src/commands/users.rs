use helpdesk_store::{SignupRequest, UserEdit};
use serde_json::json;

use crate::cli::UserCommands;
use crate::config::Config;
use crate::hasher::SaltedSha256;
use crate::support;

pub fn run(config: &Config, command: UserCommands) {
    let workspace = support::open_workspace(config);

    match command {
        UserCommands::Add {
            name,
            password,
            confirm,
            admin,
            json,
        } => {
            let request = SignupRequest {
                name,
                secret: password,
                confirm,
                admin,
            };
            match workspace.store.sign_up(request, &SaltedSha256) {
                Ok(user) => {
                    support::record(
                        &workspace.audit.users,
                        &format!("Account created: {} (admin: {}).", user.name, user.admin),
                    );
                    workspace.save();
                    if json {
                        support::emit_json(&json!({
                            "action": "users.add",
                            "name": user.name,
                            "admin": user.admin
                        }));
                    } else {
                        println!("helpdesk users add\n  Created: {}", user.name);
                    }
                }
                Err(err) => {
                    support::record(
                        &workspace.audit.users,
                        &format!("Rejected account creation: {err}."),
                    );
                    support::fail(err);
                }
            }
        }

        UserCommands::List { json } => {
            let users = workspace.store.list_users();
            if json {
                let items: Vec<_> = users
                    .iter()
                    .map(|user| json!({ "name": user.name, "admin": user.admin }))
                    .collect();
                support::emit_json(&json!({
                    "action": "users.list",
                    "count": items.len(),
                    "items": items
                }));
            } else {
                println!("helpdesk users list\n  Count: {}", users.len());
                for user in &users {
                    let role = if user.admin { "Admin" } else { "Non-Admin" };
                    println!("  - {} ({role})", user.name);
                }
            }
        }

        UserCommands::Edit {
            name,
            new_name,
            new_password,
            admin,
            json,
        } => {
            let change = UserEdit {
                name: new_name,
                secret: new_password,
                admin,
            };
            match workspace.store.edit_user(&name, change, &SaltedSha256) {
                Ok(user) => {
                    support::record(
                        &workspace.audit.users,
                        &format!("Account {name} edited; now stored as {}.", user.name),
                    );
                    workspace.save();
                    if json {
                        support::emit_json(&json!({
                            "action": "users.edit",
                            "previousName": name,
                            "name": user.name,
                            "admin": user.admin
                        }));
                    } else {
                        println!("helpdesk users edit\n  Stored as: {}", user.name);
                    }
                }
                Err(err) => support::fail(err),
            }
        }

        UserCommands::Delete { name, json } => match workspace.store.delete_user(&name) {
            Some(user) => {
                support::record(
                    &workspace.audit.users,
                    &format!("Account deleted: {}.", user.name),
                );
                workspace.save();
                if json {
                    support::emit_json(&json!({ "action": "users.delete", "name": user.name }));
                } else {
                    println!("helpdesk users delete\n  Deleted: {}", user.name);
                }
            }
            None => {
                // Deleting an absent account is tolerated as a no-op.
                if json {
                    support::emit_json(&json!({ "action": "users.delete", "name": name, "found": false }));
                } else {
                    println!("helpdesk users delete\n  No account named {name}");
                }
            }
        },

        UserCommands::Login {
            name,
            password,
            json,
        } => match workspace.store.authenticate(&name, &password, &SaltedSha256) {
            Ok(user) => {
                support::record(
                    &workspace.audit.users,
                    &format!("Successful sign-in for {} (admin: {}).", user.name, user.admin),
                );
                if json {
                    support::emit_json(&json!({
                        "action": "users.login",
                        "name": user.name,
                        "admin": user.admin
                    }));
                } else {
                    println!("helpdesk users login\n  Welcome, {}", user.name);
                }
            }
            Err(err) => {
                support::record(
                    &workspace.audit.users,
                    &format!("Failed sign-in attempt for {name}."),
                );
                support::fail(err);
            }
        },
    }
}
