//! Stats bar component
//!
//! One-line summary of the server statistics below the header.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::TicketStats;

/// Props for the StatsBar component
#[derive(Default, Props)]
pub struct StatsBarProps {
    /// Server statistics, once they have been loaded
    pub stats: Option<TicketStats>,
}

/// One-line statistics summary
#[component]
pub fn StatsBar(props: &StatsBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 3,
        ) {
            #(match props.stats.as_ref() {
                Some(stats) => element! {
                    View(flex_direction: FlexDirection::Row, column_gap: 3) {
                        Text(
                            content: format!("Total: {}", stats.total_tickets),
                            color: theme.text,
                        )
                        Text(
                            content: format!("Open: {}", stats.open_tickets),
                            color: theme.status_open,
                        )
                        Text(
                            content: format!("Avg/day: {:.1}", stats.avg_tickets_per_day),
                            color: theme.text_dimmed,
                        )
                    }
                }.into_any(),
                None => element! {
                    Text(
                        content: "Stats unavailable",
                        color: theme.text_dimmed,
                    )
                }.into_any(),
            })
        }
    }
}
