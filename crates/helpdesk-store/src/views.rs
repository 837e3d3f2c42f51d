//! Display-ready views derived from the canonical ticket log.
//!
//! View construction is read-only: a consistent snapshot of the log is
//! cloned under the read guard and the guard is released before any
//! traversal starts. Each requested view is one independent traversal of
//! that snapshot; requests for several views fan out in parallel and join
//! before returning. A concurrent writer never observes a half-built view.

use helpdesk_core::{Ticket, TicketOrder};
use rayon::prelude::*;

use crate::store::RecordStore;

/// Predicate selecting tickets for a filtered view.
#[derive(Debug, Clone)]
pub enum TicketFilter {
    Creator(String),
    Assignee(String),
}

impl TicketFilter {
    fn keep(&self, ticket: &Ticket) -> bool {
        match self {
            TicketFilter::Creator(name) => ticket.creator == *name,
            TicketFilter::Assignee(name) => ticket.assignee == *name,
        }
    }
}

impl RecordStore {
    /// All logged tickets, ascending under `order`.
    pub fn list_tickets(&self, order: TicketOrder) -> Vec<Ticket> {
        let snapshot = self.tickets_snapshot();
        if snapshot.order() == order {
            snapshot.iter().cloned().collect()
        } else {
            snapshot.pivot(order).iter().cloned().collect()
        }
    }

    /// Logged tickets matching `filter`, ascending under `order`.
    pub fn list_tickets_by(&self, order: TicketOrder, filter: &TicketFilter) -> Vec<Ticket> {
        let snapshot = self.tickets_snapshot();
        snapshot
            .subset(order, |ticket| filter.keep(ticket))
            .iter()
            .cloned()
            .collect()
    }

    /// The eleven non-id views, each built by its own traversal of one
    /// shared snapshot, computed in parallel and joined before returning.
    pub fn pivot_views(&self) -> Vec<(TicketOrder, Vec<Ticket>)> {
        let snapshot = self.tickets_snapshot();
        TicketOrder::PIVOTS
            .into_par_iter()
            .map(|order| {
                let view = snapshot.pivot(order);
                let rows: Vec<Ticket> = view.iter().cloned().collect();
                (order, rows)
            })
            .collect()
    }

    /// A user's "my tickets" (created by them) and "my assignments"
    /// (assigned to them), both in id order, computed in parallel from one
    /// snapshot.
    pub fn personal_views(&self, name: &str) -> (Vec<Ticket>, Vec<Ticket>) {
        let snapshot = self.tickets_snapshot();
        rayon::join(
            || {
                snapshot
                    .subset(TicketOrder::Id, |ticket| ticket.creator == name)
                    .iter()
                    .cloned()
                    .collect()
            },
            || {
                snapshot
                    .subset(TicketOrder::Id, |ticket| ticket.assignee == name)
                    .iter()
                    .cloned()
                    .collect()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use helpdesk_core::TicketTree;
    use helpdesk_core::{SubmissionQueue, UserTable};
    use std::cmp::Ordering;

    use crate::catalog::Catalog;

    fn ticket(id: i64, priority: usize, creator: &str, assignee: &str) -> Ticket {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        Ticket {
            id,
            product: 0,
            status: 0,
            category: 0,
            priority,
            est_hours: 8,
            start_date: start,
            due_date: start + chrono::Duration::days(id),
            creator: creator.to_string(),
            title: format!("Ticket {id}"),
            description: "placeholder".to_string(),
            assignee: assignee.to_string(),
        }
    }

    fn store_with_log() -> RecordStore {
        let mut tree = TicketTree::default();
        tree.insert(ticket(1, 2, "user1", "user2"));
        tree.insert(ticket(2, 0, "user2", "user1"));
        tree.insert(ticket(3, 1, "user1", "user1"));
        tree.insert(ticket(4, 0, "user2", "user2"));
        RecordStore::from_parts(
            Catalog::default(),
            tree,
            SubmissionQueue::new(),
            UserTable::new(),
        )
    }

    #[test]
    fn list_tickets_orders_by_the_requested_field() {
        let store = store_with_log();
        let by_priority: Vec<(usize, i64)> = store
            .list_tickets(TicketOrder::Priority)
            .into_iter()
            .map(|t| (t.priority, t.id))
            .collect();
        assert_eq!(by_priority, vec![(0, 2), (0, 4), (1, 3), (2, 1)]);
    }

    #[test]
    fn filtered_views_select_by_creator_or_assignee() {
        let store = store_with_log();
        let created = store.list_tickets_by(
            TicketOrder::Id,
            &TicketFilter::Creator("user1".to_string()),
        );
        assert_eq!(created.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);

        let assigned = store.list_tickets_by(
            TicketOrder::DueDate,
            &TicketFilter::Assignee("user2".to_string()),
        );
        assert_eq!(assigned.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn pivot_views_cover_every_non_id_ordering() {
        let store = store_with_log();
        let views = store.pivot_views();
        assert_eq!(views.len(), TicketOrder::PIVOTS.len());

        for (order, rows) in views {
            assert_eq!(rows.len(), 4, "view {order} dropped tickets");
            for pair in rows.windows(2) {
                assert_ne!(
                    order.cmp(&pair[1], &pair[0]),
                    Ordering::Less,
                    "view {order} out of order"
                );
            }
        }
    }

    #[test]
    fn personal_views_split_created_and_assigned() {
        let store = store_with_log();
        let (created, assigned) = store.personal_views("user1");
        assert_eq!(created.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(assigned.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);
    }
}
