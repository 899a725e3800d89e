//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the CLI output (display module).

use iocraft::prelude::Color;

use crate::types::{Priority, TicketStatus};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors (consistent with the CLI)
    pub status_open: Color,
    pub status_in_progress: Color,
    pub status_resolved: Color,
    pub status_closed: Color,

    // Priority colors
    pub priority_critical: Color,
    pub priority_high: Color,
    pub priority_default: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub error: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Status colors (matching display/mod.rs)
            status_open: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_resolved: Color::Green,
            status_closed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },

            // Priority colors
            priority_critical: Color::Red,
            priority_high: Color::Yellow,
            priority_default: Color::White,

            // UI colors
            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            error: Color::Red,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Open => self.status_open,
            TicketStatus::InProgress => self.status_in_progress,
            TicketStatus::Resolved => self.status_resolved,
            TicketStatus::Closed => self.status_closed,
        }
    }

    /// Get the color for a ticket priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Critical => self.priority_critical,
            Priority::High => self.priority_high,
            _ => self.priority_default,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
