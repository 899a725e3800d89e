//! Core data types shared by the CLI, the TUI, and the API client.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// Maximum length of a ticket title, enforced locally before submission.
pub const MAX_TITLE_LEN: usize = 200;

pub const VALID_CATEGORIES: &[&str] = &["billing", "technical", "account", "general"];
pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high", "critical"];
pub const VALID_STATUSES: &[&str] = &["open", "in_progress", "resolved", "closed"];

/// Ticket category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Billing,
    Technical,
    Account,
    #[default]
    General,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Billing,
        Category::Technical,
        Category::Account,
        Category::General,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Billing => write!(f, "billing"),
            Category::Technical => write!(f, "technical"),
            Category::Account => write!(f, "account"),
            Category::General => write!(f, "general"),
        }
    }
}

impl FromStr for Category {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "billing" => Ok(Category::Billing),
            "technical" => Ok(Category::Technical),
            "account" => Ok(Category::Account),
            "general" => Ok(Category::General),
            _ => Err(TriageError::InvalidCategory(s.to_string())),
        }
    }
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for Priority {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(TriageError::InvalidPriority(s.to_string())),
        }
    }
}

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Open,
    #[serde(rename = "in_progress")]
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// The next status in the triage flow, wrapping back to open.
    pub fn cycle(self) -> TicketStatus {
        match self {
            TicketStatus::Open => TicketStatus::InProgress,
            TicketStatus::InProgress => TicketStatus::Resolved,
            TicketStatus::Resolved => TicketStatus::Closed,
            TicketStatus::Closed => TicketStatus::Open,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::InProgress => write!(f, "in_progress"),
            TicketStatus::Resolved => write!(f, "resolved"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(TriageError::InvalidStatus(s.to_string())),
        }
    }
}

/// A ticket as returned by the API. The server owns every field; clients
/// never fabricate or renumber tickets locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: TicketStatus,
    pub created_at: jiff::Timestamp,
}

/// A new ticket about to be submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl Default for TicketDraft {
    fn default() -> Self {
        TicketDraft {
            title: String::new(),
            description: String::new(),
            category: Category::General,
            priority: Priority::Medium,
        }
    }
}

impl TicketDraft {
    /// Local pre-checks mirroring what the server enforces. The server
    /// remains authoritative; this just catches obvious mistakes before
    /// a round-trip.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(TriageError::Validation("Title is required.".to_string()));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(TriageError::Validation(format!(
                "Title must be {MAX_TITLE_LEN} characters or fewer."
            )));
        }
        if self.description.trim().is_empty() {
            return Err(TriageError::Validation(
                "Description is required.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Suggested classification for a ticket description. Either field may be
/// absent when the classifier has no opinion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Classification {
    pub suggested_category: Option<Category>,
    pub suggested_priority: Option<Priority>,
}

/// Aggregate ticket statistics computed by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketStats {
    pub total_tickets: u64,
    pub open_tickets: u64,
    pub avg_tickets_per_day: f64,
    #[serde(default)]
    pub priority_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub category_breakdown: BTreeMap<String, u64>,
}
