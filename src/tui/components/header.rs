//! App header bar component
//!
//! Displays the application title, the ticket count, and a loading hint.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Ticket count shown on the right
    pub ticket_count: Option<usize>,
    /// Whether a list fetch is in flight
    pub loading: bool,
}

/// App header bar showing title and ticket count
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: "Triage",
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 1) {
                #(if props.loading {
                    Some(element! {
                        Text(
                            content: "loading...",
                            color: theme.text_dimmed,
                        )
                    })
                } else {
                    None
                })
                #(props.ticket_count.map(|count| element! {
                    Text(
                        content: format!("{} tickets", count),
                        color: theme.text_dimmed,
                    )
                }))
            }
        }
    }
}
