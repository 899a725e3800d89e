//! TUI module for the interactive ticket browser
//!
//! The browser shows the live ticket list next to a submission form.
//! Keyboard input is translated into actions (`model`), pure state
//! transitions happen in the reducer, and anything that needs the API
//! goes through async handlers (`handlers`).

pub mod components;
pub mod handlers;
pub mod model;
pub mod theme;
pub mod view;

pub use model::{Action, AppState, Focus, FormState};
pub use theme::Theme;
pub use view::{TriageTui, TriageTuiProps};
