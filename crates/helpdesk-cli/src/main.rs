//! Helpdesk CLI: the `helpdesk` command.

mod cli;
mod commands;
mod config;
mod hasher;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match config::Config::load(&cli.config) {
        Ok(config) => config,
        Err(err) => support::fail(err),
    };

    match cli.command {
        Commands::Submit {
            title,
            description,
            creator,
            assignee,
            product,
            status,
            category,
            priority,
            est_hours,
            due_in_days,
            json,
        } => commands::submit::run(
            &config,
            commands::submit::Args {
                title,
                description,
                creator,
                assignee,
                product,
                status,
                category,
                priority,
                est_hours,
                due_in_days,
                json,
            },
        ),

        Commands::Queue { command } => commands::queue::run(&config, command),

        Commands::Tickets { command } => commands::tickets::run(&config, command),

        Commands::Users { command } => commands::users::run(&config, command),

        Commands::Products { command } => commands::products::run(&config, command),

        Commands::Demo { json } => commands::demo::run(&config, json),
    }
}
