//! New-ticket form pane component
//!
//! The submission form: title, description, category, and priority, plus
//! the classification indicator and any submission error. The error text
//! is whatever the server answered, unmodified.

use iocraft::prelude::*;

use crate::tui::components::Select;
use crate::tui::model::{Focus, FormState};
use crate::tui::theme::theme;

/// Props for the FormPane component
#[derive(Default, Props)]
pub struct FormPaneProps {
    /// Current form contents
    pub form: FormState,
    /// Current keyboard focus
    pub focus: Focus,
}

/// Display value for a text field, with a trailing cursor when focused
fn field_value(value: &str, focused: bool) -> String {
    if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    }
}

/// Bordered submission form on the left of the screen
#[component]
pub fn FormPane(props: &FormPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let border_color = if props.focus.is_form() {
        theme.border_focused
    } else {
        theme.border
    };

    let title_focused = props.focus == Focus::FormTitle;
    let description_focused = props.focus == Focus::FormDescription;
    let title_label = if title_focused {
        theme.border_focused
    } else {
        theme.text_dimmed
    };
    let description_label = if description_focused {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let submit_hint = if props.form.submitting {
        "Submitting..."
    } else {
        "Ctrl+S to submit"
    };

    element! {
        View(
            width: 36,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: "New Ticket", color: theme.text, weight: Weight::Bold)

            // Title
            View(margin_top: 1, flex_direction: FlexDirection::Column) {
                Text(content: "Title:", color: title_label)
                View(height: 1, overflow: Overflow::Hidden) {
                    Text(
                        content: field_value(&props.form.title, title_focused),
                        color: theme.text,
                    )
                }
            }

            // Description
            View(margin_top: 1, flex_direction: FlexDirection::Column) {
                Text(content: "Description:", color: description_label)
                View(height: 4, overflow: Overflow::Hidden) {
                    Text(
                        content: field_value(&props.form.description, description_focused),
                        color: theme.text,
                    )
                }
            }

            // Category and priority selectors
            View(margin_top: 1, flex_direction: FlexDirection::Column, row_gap: 1) {
                Select(
                    label: Some("Category"),
                    value: props.form.category.to_string(),
                    has_focus: props.focus == Focus::FormCategory,
                )
                Select(
                    label: Some("Priority"),
                    value: props.form.priority.to_string(),
                    has_focus: props.focus == Focus::FormPriority,
                    value_color: Some(theme.priority_color(props.form.priority)),
                )
            }

            // Classification indicator
            #(if props.form.classifying {
                Some(element! {
                    View(margin_top: 1) {
                        Text(content: "Classifying...", color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })

            // Submission error, verbatim
            #(props.form.error.as_ref().map(|error| element! {
                View(
                    margin_top: 1,
                    max_height: 5,
                    overflow: Overflow::Hidden,
                ) {
                    Text(
                        content: error.clone(),
                        color: theme.error,
                    )
                }
            }))

            View(margin_top: 1) {
                Text(content: submit_hint, color: theme.text_dimmed)
            }
        }
    }
}
