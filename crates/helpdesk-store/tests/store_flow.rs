//! Integration flow: submissions travel queue → decision → log, and the
//! read side sees consistent views throughout.

use helpdesk_core::TicketOrder;
use helpdesk_store::{
    CredentialHasher, SignupRequest, TicketDraft, TicketFilter, demo_store,
};

struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, secret: &str) -> String {
        format!("plain${secret}")
    }

    fn verify(&self, secret: &str, credential: &str) -> bool {
        credential == self.hash(secret)
    }
}

fn draft(creator: &str, assignee: &str, priority: usize) -> TicketDraft {
    TicketDraft {
        title: "Calibrate the tractor beam".to_string(),
        description: "It keeps picking up the neighbour's barn".to_string(),
        creator: creator.to_string(),
        assignee: assignee.to_string(),
        product: 0,
        status: 0,
        category: 1,
        priority,
        est_hours: 16,
        due_in_days: 21,
    }
}

#[test]
fn submissions_flow_from_queue_to_log() {
    let store = demo_store(&PlainHasher);

    // Drain the seeded queue: approvals land in the log, one rejection
    // disappears entirely.
    let first = store.approve_top().expect("seeded queue");
    assert_eq!(first.id, 5);
    let rejected = store.reject_top().expect("seeded queue");
    assert_eq!(rejected.id, 7);
    store.approve_top().expect("seeded queue");
    store.approve_top().expect("seeded queue");
    assert!(store.approve_top().is_err());

    assert_eq!(store.ticket_count(), 7);
    assert!(store.find_ticket(5).is_some());
    assert!(store.find_ticket(7).is_none());

    // A fresh submission continues the id sequence past the seeded records.
    let id = store.submit(draft("user1", "user2", 0)).expect("valid draft");
    assert_eq!(id, 9);
    let approved = store.approve_top().expect("just submitted");
    assert_eq!(approved.id, 9);
}

#[test]
fn views_agree_with_the_log_contents() {
    let store = demo_store(&PlainHasher);

    let all = store.list_tickets(TicketOrder::Id);
    assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);

    let by_due = store.list_tickets(TicketOrder::DueDate);
    assert_eq!(
        by_due.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![3, 4, 1, 2]
    );

    let (created, assigned) = store.personal_views("user1");
    assert_eq!(created.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(assigned.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

    let views = store.pivot_views();
    assert_eq!(views.len(), 11);
    assert!(views.iter().all(|(_, rows)| rows.len() == 4));

    // Building views leaves the canonical log untouched.
    assert_eq!(store.ticket_count(), 4);
    assert_eq!(store.list_tickets(TicketOrder::Id).len(), 4);
}

#[test]
fn filtered_views_track_deletions() {
    let store = demo_store(&PlainHasher);
    store.delete_ticket(3);

    let mine = store.list_tickets_by(
        TicketOrder::Id,
        &TicketFilter::Creator("user1".to_string()),
    );
    assert_eq!(mine.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);

    let assigned = store.list_tickets_by(
        TicketOrder::Id,
        &TicketFilter::Assignee("user2".to_string()),
    );
    assert_eq!(assigned.iter().map(|t| t.id).collect::<Vec<_>>(), vec![4]);
}

#[test]
fn accounts_round_trip_through_signup_and_login() {
    let store = demo_store(&PlainHasher);
    store
        .sign_up(
            SignupRequest {
                name: "carol".to_string(),
                secret: "hunter2".to_string(),
                confirm: "hunter2".to_string(),
                admin: false,
            },
            &PlainHasher,
        )
        .expect("name is free");

    assert!(store.authenticate("carol", "hunter2", &PlainHasher).is_ok());
    assert_eq!(store.list_users().len(), 4);

    store.delete_user("carol");
    assert!(store.authenticate("carol", "hunter2", &PlainHasher).is_err());
}
