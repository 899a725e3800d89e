//! List tickets with optional search and field filters.

use crate::api::TicketFilter;
use crate::display::format_ticket_line;
use crate::error::Result;
use crate::types::{Category, Priority, TicketStatus};

/// List tickets matching the given filters
pub async fn cmd_ls(
    search: Option<String>,
    category: Option<Category>,
    priority: Option<Priority>,
    status: Option<TicketStatus>,
    output_json: bool,
    api_url: Option<String>,
) -> Result<()> {
    let client = super::api_client(api_url)?;

    let filter = TicketFilter {
        search: search.unwrap_or_default(),
        category,
        priority,
        status,
    };
    let filtered = !filter.is_empty();
    let tickets = client.list_tickets(&filter).await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
        return Ok(());
    }

    if tickets.is_empty() {
        if filtered {
            println!("No tickets match the current filters.");
        } else {
            println!("No tickets yet.");
        }
        return Ok(());
    }

    for ticket in &tickets {
        println!("{}", format_ticket_line(ticket));
    }

    println!("\n{} ticket(s)", tickets.len());
    Ok(())
}
