//! Ticket API client module.
//!
//! This module provides the HTTP client for the remote ticket service and
//! the [`TicketFilter`] type used to compose list queries.

pub mod client;

pub use client::ApiClient;

use crate::types::{Category, Priority, TicketStatus};

/// Filter values for listing tickets.
///
/// Each field mirrors one query parameter of `GET /api/tickets/`. Empty
/// values are omitted from the query string entirely, so a default filter
/// produces an unfiltered request. Updating a field and rebuilding the query
/// is how filter changes compose; rebuilding from the same values always
/// yields the same query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub search: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: Option<TicketStatus>,
}

impl TicketFilter {
    /// Build the query pairs for this filter, dropping empty values
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.search.is_empty() {
            query.push(("search", self.search.clone()));
        }
        if let Some(category) = self.category {
            query.push(("category", category.to_string()));
        }
        if let Some(priority) = self.priority {
            query.push(("priority", priority.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.to_string()));
        }
        query
    }

    /// Check whether any filter value is set
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_empty() {
        let filter = TicketFilter::default();
        assert!(filter.is_empty());
        assert!(filter.to_query().is_empty());
    }

    #[test]
    fn test_empty_search_is_dropped() {
        let filter = TicketFilter {
            search: String::new(),
            category: Some(Category::Billing),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![("category", "billing".to_string())]
        );
    }

    #[test]
    fn test_full_filter_query_order() {
        let filter = TicketFilter {
            search: "login".to_string(),
            category: Some(Category::Account),
            priority: Some(Priority::High),
            status: Some(TicketStatus::Open),
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("search", "login".to_string()),
                ("category", "account".to_string()),
                ("priority", "high".to_string()),
                ("status", "open".to_string()),
            ]
        );
    }

    #[test]
    fn test_in_progress_status_uses_wire_name() {
        let filter = TicketFilter {
            status: Some(TicketStatus::InProgress),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![("status", "in_progress".to_string())]
        );
    }

    #[test]
    fn test_rebuilding_query_is_idempotent() {
        let mut filter = TicketFilter::default();
        filter.category = Some(Category::Technical);
        let first = filter.to_query();
        filter.category = Some(Category::Technical);
        assert_eq!(filter.to_query(), first);
    }

    #[test]
    fn test_updating_one_field_preserves_the_rest() {
        let mut filter = TicketFilter {
            search: "printer".to_string(),
            category: Some(Category::Technical),
            ..Default::default()
        };
        filter.priority = Some(Priority::Critical);
        assert_eq!(
            filter.to_query(),
            vec![
                ("search", "printer".to_string()),
                ("category", "technical".to_string()),
                ("priority", "critical".to_string()),
            ]
        );
    }

    #[test]
    fn test_clearing_a_field_drops_it_from_the_query() {
        let mut filter = TicketFilter {
            search: "printer".to_string(),
            status: Some(TicketStatus::Resolved),
            ..Default::default()
        };
        filter.search.clear();
        filter.status = None;
        assert!(filter.is_empty());
    }

    #[test]
    fn test_query_snapshot() {
        let filter = TicketFilter {
            search: "refund".to_string(),
            category: Some(Category::Billing),
            ..Default::default()
        };
        insta::assert_debug_snapshot!(filter.to_query(), @r#"
        [
            (
                "search",
                "refund",
            ),
            (
                "category",
                "billing",
            ),
        ]
        "#);
    }
}
