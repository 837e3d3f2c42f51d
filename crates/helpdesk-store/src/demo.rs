//! Canonical demo state for populating a fresh store.

use chrono::{DateTime, Duration, Utc};
use helpdesk_core::{SubmissionQueue, Ticket, TicketTree, User, UserTable};

use crate::auth::CredentialHasher;
use crate::catalog::Catalog;
use crate::store::RecordStore;

/// Build a store seeded with the demo accounts, products, logged tickets
/// and queued submissions. Each demo account's password is its username.
pub fn demo_store(hasher: &dyn CredentialHasher) -> RecordStore {
    let catalog = Catalog::with_products(vec![
        "Flying Saucer".to_string(),
        "Magic Wand".to_string(),
        "Arc Reactor".to_string(),
    ]);

    let mut users = UserTable::new();
    for (name, admin) in [("admin", true), ("user1", false), ("user2", false)] {
        users.insert(User {
            name: name.to_string(),
            credential: hasher.hash(name),
            admin,
        });
    }

    let now = Utc::now();
    let mut tickets = TicketTree::default();
    for ticket in demo_tickets(now) {
        tickets.insert(ticket);
    }
    let mut submissions = SubmissionQueue::new();
    for ticket in demo_submissions(now) {
        submissions.push(ticket);
    }

    RecordStore::from_parts(catalog, tickets, submissions, users)
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: i64,
    product: usize,
    status: usize,
    category: usize,
    priority: usize,
    est_hours: i64,
    due_in_days: i64,
    creator: &str,
    title: &str,
    description: &str,
    assignee: &str,
    now: DateTime<Utc>,
) -> Ticket {
    Ticket {
        id,
        product,
        status,
        category,
        priority,
        est_hours,
        start_date: now,
        due_date: now + Duration::days(due_in_days),
        creator: creator.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        assignee: assignee.to_string(),
    }
}

fn demo_tickets(now: DateTime<Utc>) -> [Ticket; 4] {
    [
        record(
            1,
            0,
            2,
            1,
            2,
            20,
            186,
            "user1",
            "Address windscreen frosting",
            "How do they do it on planes?",
            "user1",
            now,
        ),
        record(
            2,
            1,
            0,
            0,
            1,
            65,
            762,
            "user2",
            "Make up more spells",
            "Use Harry Potter for reference",
            "user1",
            now,
        ),
        record(
            3,
            1,
            0,
            2,
            2,
            45,
            150,
            "user1",
            "Replace core with unicorn mane",
            "Shinier sparks, demonstrated success with child user demographic",
            "user2",
            now,
        ),
        record(
            4,
            0,
            2,
            0,
            1,
            45,
            180,
            "user2",
            "Add tractor beam",
            "Food supplies running low, more cows needed",
            "user2",
            now,
        ),
    ]
}

fn demo_submissions(now: DateTime<Utc>) -> [Ticket; 4] {
    [
        record(
            5,
            0,
            0,
            0,
            0,
            100,
            186,
            "user1",
            "Design convertible tires",
            "Wheel spokes become turbines",
            "user2",
            now,
        ),
        record(
            6,
            1,
            1,
            1,
            2,
            10,
            367,
            "user1",
            "Refine handguard design",
            "More dragonskin!",
            "user1",
            now,
        ),
        record(
            7,
            2,
            1,
            1,
            1,
            20,
            367,
            "user2",
            "Miniaturize",
            "Tony Stark was able to build this! In a cave!! With a box of scraps!!!",
            "user1",
            now,
        ),
        record(
            8,
            0,
            2,
            1,
            2,
            80,
            824,
            "user2",
            "Redesign Airlock",
            "Currently fails above 50,000m",
            "user2",
            now,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainHasher;

    impl CredentialHasher for PlainHasher {
        fn hash(&self, secret: &str) -> String {
            format!("plain${secret}")
        }

        fn verify(&self, secret: &str, credential: &str) -> bool {
            credential == self.hash(secret)
        }
    }

    #[test]
    fn demo_state_has_the_expected_shape() {
        let store = demo_store(&PlainHasher);
        assert_eq!(store.ticket_count(), 4);
        assert_eq!(store.submission_count(), 4);
        assert_eq!(store.list_users().len(), 3);
        assert_eq!(store.products().len(), 3);
        assert!(store.authenticate("admin", "admin", &PlainHasher).is_ok());
    }

    #[test]
    fn demo_submissions_pop_in_urgency_order() {
        let store = demo_store(&PlainHasher);
        let mut popped = Vec::new();
        while let Ok(ticket) = store.reject_top() {
            popped.push(ticket.id);
        }
        assert_eq!(popped, vec![5, 7, 6, 8]);
    }
}
