//! Change a ticket's status.

use crate::display::format_ticket_line;
use crate::error::Result;
use crate::types::TicketStatus;

/// Set a ticket's status and print the server's copy
pub async fn cmd_status(
    id: u64,
    status: TicketStatus,
    output_json: bool,
    api_url: Option<String>,
) -> Result<()> {
    let client = super::api_client(api_url)?;
    let ticket = client.update_status(id, status).await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&ticket)?);
    } else {
        println!("{}", format_ticket_line(&ticket));
    }
    Ok(())
}
