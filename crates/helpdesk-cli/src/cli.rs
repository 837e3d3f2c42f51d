use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "helpdesk",
    about = "Helpdesk: an in-memory record store for help-desk ticket tracking",
    version
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "helpdesk.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a ticket into the approval queue
    Submit {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Username submitting the ticket
        #[arg(long)]
        creator: String,

        /// Username the ticket is assigned to
        #[arg(long)]
        assignee: String,

        /// Product option index
        #[arg(long, default_value_t = 0)]
        product: usize,

        /// Status option index
        #[arg(long, default_value_t = 0)]
        status: usize,

        /// Category option index
        #[arg(long, default_value_t = 0)]
        category: usize,

        /// Priority option index (lower is more urgent)
        #[arg(long, default_value_t = 1)]
        priority: usize,

        /// Estimated hours of work
        #[arg(long)]
        est_hours: i64,

        /// Days until the ticket is due
        #[arg(long)]
        due_in_days: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect and decide on queued submissions
    Queue {
        #[command(subcommand)]
        command: QueueCommands,
    },

    /// Work with the canonical ticket log
    Tickets {
        #[command(subcommand)]
        command: TicketCommands,
    },

    /// Manage accounts
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage the product options
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },

    /// Seed the archive with the demo state
    Demo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum QueueCommands {
    /// List pending submissions in queue order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Approve the first-in-line submission into the log
    Approve {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reject the first-in-line submission
    Reject {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Withdraw a queued submission by id
    Withdraw {
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum TicketCommands {
    /// List logged tickets under an ordering, optionally filtered
    List {
        /// Ordering: id, product, status, category, priority, est-hours,
        /// start-date, due-date, creator, title, description, assignee
        #[arg(long, default_value = "id")]
        by: String,

        /// Only tickets created by this user
        #[arg(long)]
        creator: Option<String>,

        /// Only tickets assigned to this user
        #[arg(long)]
        assignee: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one ticket by id
    Show {
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a logged ticket by id
    Delete {
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build all eleven pivoted views at once
    Views {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create an account
    Add {
        name: String,

        #[arg(long)]
        password: String,

        /// Repeat of the password
        #[arg(long)]
        confirm: String,

        /// Grant admin rights
        #[arg(long)]
        admin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List accounts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an account (re-keyed under the new name)
    Edit {
        name: String,

        #[arg(long)]
        new_name: Option<String>,

        #[arg(long)]
        new_password: Option<String>,

        /// Set or clear admin rights
        #[arg(long)]
        admin: Option<bool>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an account
    Delete {
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a name/password pair against the stored credential
    Login {
        name: String,

        #[arg(long)]
        password: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ProductCommands {
    /// List product options
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a product option
    Add {
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rename the product option at an index
    Rename {
        index: usize,
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a product option and every record carrying it
    Remove {
        index: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
