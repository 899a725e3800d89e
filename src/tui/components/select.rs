//! Compact inline selector component for enum fields
//!
//! Cycling happens in the reducer with left/right keys; this component
//! only displays the current value as: Label: ◀ value ▶

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    /// Display string of the current value
    pub value: String,
    /// Whether the selector has focus
    pub has_focus: bool,
    /// Optional color for the value (for semantic coloring like status)
    pub value_color: Option<Color>,
}

/// Compact inline selector with arrow indicators
///
/// Renders as: Label: ◀ value ▶
/// Arrows indicate the value can be cycled with left/right keys.
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let label_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let arrow_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let value_color = props.value_color.unwrap_or(theme.text);

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(
                    content: format!("{}:", label),
                    color: label_color,
                )
            }))
            Text(
                content: "◀",
                color: arrow_color,
            )
            Text(
                content: props.value.clone(),
                color: value_color,
            )
            Text(
                content: "▶",
                color: arrow_color,
            )
        }
    }
}
