//! Shared TUI components
//!
//! Display-only building blocks for the ticket browser. Everything here
//! renders from props; state changes flow through the reducer instead.

pub mod empty_state;
pub mod filter_bar;
pub mod footer;
pub mod form_pane;
pub mod header;
pub mod list_pane;
pub mod select;
pub mod stats_bar;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use filter_bar::{FilterBar, FilterBarProps};
pub use footer::{
    Footer, FooterProps, Shortcut, filter_shortcuts, form_shortcuts, list_shortcuts,
    search_shortcuts,
};
pub use form_pane::{FormPane, FormPaneProps};
pub use header::{Header, HeaderProps};
pub use list_pane::{ListPane, ListPaneProps, TicketRow, TicketRowProps};
pub use select::{Select, SelectProps};
pub use stats_bar::{StatsBar, StatsBarProps};
pub use toast::{Toast, ToastLevel, render_toast};
