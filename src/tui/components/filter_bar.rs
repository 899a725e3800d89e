//! Filter bar component
//!
//! Search input plus the three filter selectors above the ticket list.
//! Everything shown here feeds the list query; "all" means the field is
//! left out of the request entirely.

use iocraft::prelude::*;

use crate::api::TicketFilter;
use crate::tui::components::Select;
use crate::tui::model::Focus;
use crate::tui::theme::theme;

/// Props for the FilterBar component
#[derive(Default, Props)]
pub struct FilterBarProps {
    /// The active filter
    pub filter: TicketFilter,
    /// Current keyboard focus
    pub focus: Focus,
}

/// Search box and filter selectors
#[component]
pub fn FilterBar(props: &FilterBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let search_focused = props.focus == Focus::Search;
    let label_color = if search_focused {
        theme.border_focused
    } else {
        theme.text_dimmed
    };
    // Trailing underscore acts as the cursor while typing
    let search_value = if search_focused {
        format!("{}_", props.filter.search)
    } else if props.filter.search.is_empty() {
        "(press / to search)".to_string()
    } else {
        props.filter.search.clone()
    };
    let search_color = if props.filter.search.is_empty() && !search_focused {
        theme.text_dimmed
    } else {
        theme.text
    };

    let category = props
        .filter
        .category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "all".to_string());
    let priority = props
        .filter
        .priority
        .map(|p| p.to_string())
        .unwrap_or_else(|| "all".to_string());
    let status = props
        .filter
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "all".to_string());

    element! {
        View(
            width: 100pct,
            height: 2,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: "Search:", color: label_color)
                Text(content: search_value, color: search_color)
            }
            View(flex_direction: FlexDirection::Row, column_gap: 2) {
                Select(
                    label: Some("Category"),
                    value: category,
                    has_focus: props.focus == Focus::FilterCategory,
                )
                Select(
                    label: Some("Priority"),
                    value: priority,
                    has_focus: props.focus == Focus::FilterPriority,
                )
                Select(
                    label: Some("Status"),
                    value: status,
                    has_focus: props.focus == Focus::FilterStatus,
                )
            }
        }
    }
}
