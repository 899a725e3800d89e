//! Ticket list pane component
//!
//! Renders the scrollable ticket list with overflow indicators, plus the
//! empty states for loading, no data, and failed loads.

use iocraft::prelude::*;

use crate::tui::components::{EmptyState, EmptyStateKind};
use crate::tui::model::compute_list_window;
use crate::tui::theme::theme;
use crate::types::{Priority, Ticket, TicketStatus};

/// Props for the ListPane component
#[derive(Default, Props)]
pub struct ListPaneProps {
    /// Tickets to display
    pub tickets: Vec<Ticket>,
    /// Index of the selected ticket
    pub selected_index: usize,
    /// Scroll offset
    pub scroll_offset: usize,
    /// Number of rows available for ticket rows
    pub visible_height: usize,
    /// Whether the list has keyboard focus
    pub has_focus: bool,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Error from the last fetch, if any
    pub load_error: Option<String>,
    /// Whether any filter is active
    pub filtered: bool,
}

/// Scrollable ticket list with overflow indicators
#[component]
pub fn ListPane(props: &ListPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    // Empty states replace the list entirely
    if props.tickets.is_empty() {
        let kind = if props.loading {
            EmptyStateKind::Loading
        } else if props.load_error.is_some() {
            EmptyStateKind::LoadFailed
        } else if props.filtered {
            EmptyStateKind::NoMatches
        } else {
            EmptyStateKind::NoTickets
        };
        return element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: border_color,
            ) {
                EmptyState(kind: kind, detail: props.load_error.clone())
            }
        };
    }

    let window = compute_list_window(
        props.tickets.len(),
        props.scroll_offset,
        props.visible_height,
    );
    let visible: Vec<Ticket> = props.tickets[window.start..window.end].to_vec();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            // "More above" indicator
            #(if window.more_above > 0 {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more above", window.more_above),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })

            // Ticket rows
            #(visible.iter().enumerate().map(|(i, ticket)| {
                let actual_index = window.start + i;
                element! {
                    TicketRow(
                        ticket: ticket.clone(),
                        is_selected: actual_index == props.selected_index,
                    )
                }
            }))

            // "More below" indicator
            #(if window.more_below > 0 {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more below", window.more_below),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}

/// Props for a single ticket row
#[derive(Default, Props)]
pub struct TicketRowProps {
    /// The ticket to display
    pub ticket: Ticket,
    /// Whether this row is selected
    pub is_selected: bool,
}

/// Short status badge text
fn status_badge(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "opn",
        TicketStatus::InProgress => "wip",
        TicketStatus::Resolved => "res",
        TicketStatus::Closed => "cls",
    }
}

/// Short priority badge text
fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "med",
        Priority::High => "high",
        Priority::Critical => "crit",
    }
}

/// Single ticket row in the list
#[component]
pub fn TicketRow(props: &TicketRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let ticket = &props.ticket;

    let status_color = theme.status_color(ticket.status);
    let priority_color = theme.priority_color(ticket.priority);
    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = theme.text;

    // Selection indicator
    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            // Selection indicator - fixed width, won't shrink
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: text_color)
            }

            // Ticket ID - fixed width, won't shrink
            View(width: 8, flex_shrink: 0.0) {
                Text(
                    content: format!("#{:<6}", ticket.id),
                    color: if props.is_selected { text_color } else { theme.id_color },
                )
            }

            // Priority badge - fixed width, won't shrink
            View(width: 7, flex_shrink: 0.0) {
                Text(
                    content: format!("[{}]", priority_badge(ticket.priority)),
                    color: if props.is_selected { text_color } else { priority_color },
                )
            }

            // Status badge - fixed width, won't shrink
            View(width: 6, flex_shrink: 0.0) {
                Text(
                    content: format!("[{}]", status_badge(ticket.status)),
                    color: if props.is_selected { text_color } else { status_color },
                )
            }

            // Title - flexible, takes remaining space and truncates via overflow
            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(
                    content: format!(" {}", ticket.title),
                    color: text_color,
                )
            }

            // Category - fixed width on the right
            View(width: 10, flex_shrink: 0.0, justify_content: JustifyContent::End) {
                Text(
                    content: ticket.category.to_string(),
                    color: theme.text_dimmed,
                )
            }
        }
    }
}
