//! In-memory ticket list shared by the CLI and the TUI.
//!
//! The collection holds at most one entry per ticket id and preserves
//! insertion order. The server owns ticket contents; local mutations only
//! rearrange or overwrite entries with authoritative server responses.

use crate::types::Ticket;

/// Ordered collection of tickets, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketCollection {
    tickets: Vec<Ticket>,
}

impl TicketCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents with a fresh server response
    pub fn replace_all(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
    }

    /// Insert a newly created ticket at the front
    pub fn prepend(&mut self, ticket: Ticket) {
        self.tickets.insert(0, ticket);
    }

    /// Overwrite the entry with the same id, keeping its position
    ///
    /// Returns false and leaves the collection untouched when no entry has
    /// that id. Patching with the same ticket twice is a no-op the second
    /// time since the entry is overwritten wholesale.
    pub fn patch_by_id(&mut self, ticket: Ticket) -> bool {
        match self.tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(slot) => {
                *slot = ticket;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Ticket> {
        self.tickets.get(index)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    pub fn as_slice(&self) -> &[Ticket] {
        &self.tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Priority, TicketStatus};

    fn make_ticket(id: u64, title: &str) -> Ticket {
        Ticket {
            id,
            title: title.to_string(),
            description: format!("Description for {title}"),
            category: Category::General,
            priority: Priority::Medium,
            status: TicketStatus::Open,
            created_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_replace_all_is_total() {
        let mut collection = TicketCollection::new();
        collection.replace_all(vec![make_ticket(1, "old"), make_ticket(2, "older")]);
        collection.replace_all(vec![make_ticket(3, "new")]);

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).map(|t| t.id), Some(3));
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut collection = TicketCollection::new();
        collection.replace_all(vec![make_ticket(1, "a"), make_ticket(2, "b")]);
        collection.prepend(make_ticket(3, "t"));

        let ids: Vec<u64> = collection.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_patch_by_id_preserves_order_and_neighbors() {
        let mut collection = TicketCollection::new();
        let a = make_ticket(1, "a");
        let c = make_ticket(3, "c");
        collection.replace_all(vec![a.clone(), make_ticket(2, "b"), c.clone()]);

        let mut patched = make_ticket(2, "b");
        patched.status = TicketStatus::Resolved;
        assert!(collection.patch_by_id(patched.clone()));

        let ids: Vec<u64> = collection.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(collection.get(0), Some(&a));
        assert_eq!(collection.get(1), Some(&patched));
        assert_eq!(collection.get(2), Some(&c));
    }

    #[test]
    fn test_patch_by_id_absent_is_a_no_op() {
        let mut collection = TicketCollection::new();
        collection.replace_all(vec![make_ticket(1, "a")]);
        let before = collection.clone();

        assert!(!collection.patch_by_id(make_ticket(99, "ghost")));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_patch_by_id_is_idempotent() {
        let mut collection = TicketCollection::new();
        collection.replace_all(vec![make_ticket(1, "a")]);

        let mut patched = make_ticket(1, "a");
        patched.status = TicketStatus::Closed;
        collection.patch_by_id(patched.clone());
        let once = collection.clone();
        collection.patch_by_id(patched);

        assert_eq!(collection, once);
    }

    #[test]
    fn test_find_by_id() {
        let mut collection = TicketCollection::new();
        collection.replace_all(vec![make_ticket(1, "a"), make_ticket(2, "b")]);

        assert_eq!(collection.find_by_id(2).map(|t| t.title.as_str()), Some("b"));
        assert!(collection.find_by_id(7).is_none());
    }

    #[test]
    fn test_empty_collection() {
        let collection = TicketCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.get(0).is_none());
    }
}
