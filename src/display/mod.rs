//! Colored terminal output helpers for the CLI

use owo_colors::OwoColorize;

use crate::types::{Category, Priority, Ticket, TicketStatus};

pub fn format_status_colored(status: TicketStatus) -> String {
    let badge = format!("[{}]", status);
    match status {
        TicketStatus::Open => badge.yellow().to_string(),
        TicketStatus::InProgress => badge.cyan().to_string(),
        TicketStatus::Resolved => badge.green().to_string(),
        TicketStatus::Closed => badge.dimmed().to_string(),
    }
}

pub fn format_priority_colored(priority: Priority) -> String {
    let badge = format!("[{}]", priority);
    match priority {
        Priority::Critical => badge.red().to_string(),
        Priority::High => badge.yellow().to_string(),
        Priority::Medium => badge,
        Priority::Low => badge.dimmed().to_string(),
    }
}

/// Format a ticket for single-line display with colors
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let id_padded = format!("#{:<6}", ticket.id);
    format!(
        "{} {}{} {} {}",
        id_padded.cyan(),
        format_priority_colored(ticket.priority),
        format_status_colored(ticket.status),
        ticket.title,
        ticket.category.to_string().dimmed(),
    )
}

/// Format a timestamp for display, keeping just the date part
pub fn format_date_for_display(created_at: &jiff::Timestamp) -> String {
    created_at.strftime("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ticket() -> Ticket {
        Ticket {
            id: 7,
            title: "Printer on fire".to_string(),
            description: "It is actually on fire.".to_string(),
            category: Category::Technical,
            priority: Priority::Critical,
            status: TicketStatus::Open,
            created_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_format_date_for_display() {
        let ts: jiff::Timestamp = "2026-01-15T10:30:00Z".parse().unwrap();
        assert_eq!(format_date_for_display(&ts), "2026-01-15");
        assert_eq!(
            format_date_for_display(&jiff::Timestamp::UNIX_EPOCH),
            "1970-01-01"
        );
    }

    #[test]
    fn test_format_ticket_line_contains_fields() {
        let line = format_ticket_line(&make_ticket());
        assert!(line.contains("#7"));
        assert!(line.contains("[critical]"));
        assert!(line.contains("[open]"));
        assert!(line.contains("Printer on fire"));
        assert!(line.contains("technical"));
    }

    #[test]
    fn test_status_badges_keep_wire_names() {
        assert!(format_status_colored(TicketStatus::InProgress).contains("[in_progress]"));
        assert!(format_status_colored(TicketStatus::Closed).contains("[closed]"));
    }
}
