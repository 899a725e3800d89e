//! Empty state component
//!
//! Displays helpful messages when the list has nothing to show. An empty
//! result is an expected outcome, not an error.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Tickets are being loaded
    Loading,
    /// No tickets exist yet
    #[default]
    NoTickets,
    /// No tickets match the active filters
    NoMatches,
    /// The list could not be loaded
    LoadFailed,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Optional detail line (for LoadFailed)
    pub detail: Option<String>,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Loading tickets...", ""),
        EmptyStateKind::NoTickets => (
            "i",
            "No Tickets",
            "Nothing has been submitted yet.",
            "Press 'n' to submit the first ticket.",
        ),
        EmptyStateKind::NoMatches => (
            "?",
            "No Results",
            "No tickets match the current filters.",
            "Adjust the filters, or press Esc to clear the search.",
        ),
        EmptyStateKind::LoadFailed => (
            "!",
            "Load Failed",
            "The ticket list could not be loaded.",
            "Press 'r' to retry.",
        ),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            // Icon in a box
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if props.kind == EmptyStateKind::LoadFailed {
                    theme.error
                } else {
                    theme.border
                },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: if props.kind == EmptyStateKind::LoadFailed {
                        theme.error
                    } else {
                        theme.text_dimmed
                    },
                    weight: Weight::Bold,
                )
            }

            // Title
            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            // Message
            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            // Detail line (if applicable)
            #(props.detail.as_ref().map(|detail| element! {
                View(margin_top: 1, max_width: 60) {
                    Text(
                        content: detail.clone(),
                        color: theme.error,
                    )
                }
            }))

            // Hint
            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 2) {
                        Text(
                            content: hint,
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
