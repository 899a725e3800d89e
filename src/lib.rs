pub mod api;
pub mod cli;
pub mod collection;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod tui;
pub mod types;

pub use api::{ApiClient, TicketFilter};
pub use collection::TicketCollection;
pub use config::Config;
pub use error::{Result, TriageError};
pub use types::{
    Category, Classification, MAX_TITLE_LEN, Priority, Ticket, TicketDraft, TicketStats,
    TicketStatus, VALID_CATEGORIES, VALID_PRIORITIES, VALID_STATUSES,
};
