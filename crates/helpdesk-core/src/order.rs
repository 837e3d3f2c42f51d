//! Ticket orderings: the pluggable strict total orders a tree can be built
//! under.
//!
//! Every non-id ordering falls back to the id as a final tiebreaker, so each
//! variant is a total order over tickets and tree placement is always
//! deterministic.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::ticket::Ticket;

/// The twelve orderings a [`crate::TicketTree`] can be built under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketOrder {
    Id,
    Product,
    Status,
    Category,
    Priority,
    EstHours,
    StartDate,
    DueDate,
    Creator,
    Title,
    Description,
    Assignee,
}

impl TicketOrder {
    /// The eleven non-id orderings, in the order views are offered.
    pub const PIVOTS: [TicketOrder; 11] = [
        TicketOrder::Product,
        TicketOrder::Status,
        TicketOrder::Category,
        TicketOrder::EstHours,
        TicketOrder::Priority,
        TicketOrder::StartDate,
        TicketOrder::DueDate,
        TicketOrder::Creator,
        TicketOrder::Assignee,
        TicketOrder::Title,
        TicketOrder::Description,
    ];

    /// Compare two tickets under this ordering. Numeric and chronological
    /// fields compare directly; text fields compare case-insensitively. Ties
    /// break on the id, which is externally unique, so two distinct tickets
    /// never compare equal.
    pub fn cmp(self, a: &Ticket, b: &Ticket) -> Ordering {
        let primary = match self {
            TicketOrder::Id => return a.id.cmp(&b.id),
            TicketOrder::Product => a.product.cmp(&b.product),
            TicketOrder::Status => a.status.cmp(&b.status),
            TicketOrder::Category => a.category.cmp(&b.category),
            TicketOrder::Priority => a.priority.cmp(&b.priority),
            TicketOrder::EstHours => a.est_hours.cmp(&b.est_hours),
            TicketOrder::StartDate => a.start_date.cmp(&b.start_date),
            TicketOrder::DueDate => a.due_date.cmp(&b.due_date),
            TicketOrder::Creator => fold_cmp(&a.creator, &b.creator),
            TicketOrder::Title => fold_cmp(&a.title, &b.title),
            TicketOrder::Description => fold_cmp(&a.description, &b.description),
            TicketOrder::Assignee => fold_cmp(&a.assignee, &b.assignee),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }

    /// Stable machine name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            TicketOrder::Id => "id",
            TicketOrder::Product => "product",
            TicketOrder::Status => "status",
            TicketOrder::Category => "category",
            TicketOrder::Priority => "priority",
            TicketOrder::EstHours => "est-hours",
            TicketOrder::StartDate => "start-date",
            TicketOrder::DueDate => "due-date",
            TicketOrder::Creator => "creator",
            TicketOrder::Title => "title",
            TicketOrder::Description => "description",
            TicketOrder::Assignee => "assignee",
        }
    }

    /// Human-readable label for display rows.
    pub fn label(self) -> &'static str {
        match self {
            TicketOrder::Id => "Ticket ID",
            TicketOrder::Product => "Product",
            TicketOrder::Status => "Status",
            TicketOrder::Category => "Category",
            TicketOrder::Priority => "Priority",
            TicketOrder::EstHours => "Estimated Hours to Complete",
            TicketOrder::StartDate => "Start Date",
            TicketOrder::DueDate => "Due Date",
            TicketOrder::Creator => "Creator",
            TicketOrder::Title => "Title",
            TicketOrder::Description => "Description",
            TicketOrder::Assignee => "Assignee",
        }
    }
}

impl fmt::Display for TicketOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized ordering names.
#[derive(Debug, thiserror::Error)]
#[error("unknown ticket ordering: {0}")]
pub struct OrderParseError(pub String);

impl FromStr for TicketOrder {
    type Err = OrderParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(TicketOrder::Id),
            "product" => Ok(TicketOrder::Product),
            "status" => Ok(TicketOrder::Status),
            "category" => Ok(TicketOrder::Category),
            "priority" => Ok(TicketOrder::Priority),
            "est-hours" => Ok(TicketOrder::EstHours),
            "start-date" => Ok(TicketOrder::StartDate),
            "due-date" => Ok(TicketOrder::DueDate),
            "creator" => Ok(TicketOrder::Creator),
            "title" => Ok(TicketOrder::Title),
            "description" => Ok(TicketOrder::Description),
            "assignee" => Ok(TicketOrder::Assignee),
            other => Err(OrderParseError(other.to_string())),
        }
    }
}

/// Case-insensitive lexicographic comparison without allocating.
fn fold_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ticket(id: i64, creator: &str, priority: usize) -> Ticket {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        Ticket {
            id,
            product: 0,
            status: 0,
            category: 0,
            priority,
            est_hours: 8,
            start_date: start,
            due_date: start + chrono::Duration::days(14),
            creator: creator.to_string(),
            title: String::new(),
            description: String::new(),
            assignee: String::new(),
        }
    }

    #[test]
    fn text_orderings_fold_case() {
        let a = ticket(1, "Alice", 0);
        let b = ticket(2, "alfred", 0);
        assert_eq!(TicketOrder::Creator.cmp(&a, &b), Ordering::Less);
        assert_eq!(TicketOrder::Creator.cmp(&b, &a), Ordering::Greater);
    }

    #[test]
    fn equal_keys_break_ties_on_id() {
        let a = ticket(1, "alice", 2);
        let b = ticket(2, "Alice", 2);
        assert_eq!(TicketOrder::Creator.cmp(&a, &b), Ordering::Less);
        assert_eq!(TicketOrder::Priority.cmp(&b, &a), Ordering::Greater);
    }

    #[test]
    fn names_round_trip() {
        for order in TicketOrder::PIVOTS.into_iter().chain([TicketOrder::Id]) {
            assert_eq!(order.as_str().parse::<TicketOrder>().unwrap(), order);
        }
        assert!("resolution".parse::<TicketOrder>().is_err());
    }
}
