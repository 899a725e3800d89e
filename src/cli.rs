use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::str::FromStr;

use crate::types::{
    Category, Priority, TicketStatus, VALID_CATEGORIES, VALID_PRIORITIES, VALID_STATUSES,
};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Terminal client for a ticket triage service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the ticket API (overrides config and TRIAGE_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new ticket
    #[command(visible_alias = "new")]
    Submit {
        /// Ticket title
        #[arg(short, long)]
        title: String,

        /// Description text
        #[arg(short, long)]
        description: String,

        /// Category: billing, technical, account, general (case-insensitive)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Priority: low, medium, high, critical (case-insensitive)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Skip asking the server to suggest category and priority
        #[arg(long)]
        no_classify: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tickets
    #[command(visible_alias = "list")]
    Ls {
        /// Search text matched against title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category (case-insensitive)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Filter by priority (case-insensitive)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Filter by status (case-insensitive)
        #[arg(long, value_parser = parse_status)]
        status: Option<TicketStatus>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a ticket's status
    Status {
        /// Ticket id
        id: u64,

        /// New status: open, in_progress, resolved, closed (case-insensitive)
        #[arg(value_parser = parse_status)]
        status: TicketStatus,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show aggregate ticket statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },

    /// Open the interactive terminal UI
    Ui,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api.url, request.timeout)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api.url, request.timeout)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self, api_url: Option<String>) -> crate::error::Result<()> {
        use crate::commands::{
            SubmitOptions, cmd_config_get, cmd_config_set, cmd_config_show, cmd_ls, cmd_stats,
            cmd_status, cmd_submit, cmd_ui,
        };

        match self {
            Commands::Submit {
                title,
                description,
                category,
                priority,
                no_classify,
                json,
            } => {
                let opts = SubmitOptions {
                    title,
                    description,
                    category,
                    priority,
                    no_classify,
                    json,
                };
                cmd_submit(opts, api_url).await
            }

            Commands::Ls {
                search,
                category,
                priority,
                status,
                json,
            } => cmd_ls(search, category, priority, status, json, api_url).await,

            Commands::Status { id, status, json } => cmd_status(id, status, json, api_url).await,

            Commands::Stats { json } => cmd_stats(json, api_url).await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }

            Commands::Ui => cmd_ui(api_url).await,
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_category(s: &str) -> Result<Category, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "category",
        VALID_CATEGORIES,
    )
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "priority",
        VALID_PRIORITIES,
    )
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    parse_with_validation(
        s,
        |v| TicketStatus::from_str(v).map_err(|_| String::new()),
        "status",
        VALID_STATUSES,
    )
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "triage", &mut io::stdout());
}
