//! Submit a new ticket, optionally letting the server suggest fields first.

use crate::display::format_ticket_line;
use crate::error::Result;
use crate::types::{Category, Priority, TicketDraft};

/// Options for submitting a new ticket
pub struct SubmitOptions {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub no_classify: bool,
    pub json: bool,
}

/// Submit a ticket and print the server's copy
pub async fn cmd_submit(options: SubmitOptions, api_url: Option<String>) -> Result<()> {
    let client = super::api_client(api_url)?;

    let mut draft = TicketDraft {
        title: options.title,
        description: options.description,
        category: options.category.unwrap_or_default(),
        priority: options.priority.unwrap_or_default(),
    };
    draft.validate()?;

    // Ask the server to fill in fields the user left unset. Explicit flags
    // always win, and a failed classification just keeps the defaults.
    if !options.no_classify && (options.category.is_none() || options.priority.is_none()) {
        match client.classify(&draft.description).await {
            Ok(suggestion) => {
                if options.category.is_none()
                    && let Some(category) = suggestion.suggested_category
                {
                    draft.category = category;
                }
                if options.priority.is_none()
                    && let Some(priority) = suggestion.suggested_priority
                {
                    draft.priority = priority;
                }
            }
            Err(e) => {
                tracing::warn!("Classification failed, keeping defaults: {e}");
            }
        }
    }

    let ticket = client.create_ticket(&draft).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&ticket)?);
    } else {
        println!("{}", format_ticket_line(&ticket));
    }
    Ok(())
}
