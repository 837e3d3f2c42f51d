//! Row codecs for the persisted record formats.
//!
//! Tickets persist as 12-column rows and users as 3-column rows, both with
//! a stable column order and RFC 3339 timestamps, so any row-oriented
//! consumer can read them back.

use chrono::{DateTime, SecondsFormat, Utc};
use helpdesk_core::{Ticket, User};

use crate::error::PersistError;

pub fn ticket_to_row(ticket: &Ticket) -> Vec<String> {
    vec![
        ticket.id.to_string(),
        ticket.product.to_string(),
        ticket.status.to_string(),
        ticket.category.to_string(),
        ticket.priority.to_string(),
        ticket.est_hours.to_string(),
        rfc3339(ticket.start_date),
        rfc3339(ticket.due_date),
        ticket.creator.clone(),
        ticket.title.clone(),
        ticket.description.clone(),
        ticket.assignee.clone(),
    ]
}

pub fn ticket_from_row(name: &str, row_no: usize, row: &[String]) -> Result<Ticket, PersistError> {
    if row.len() != 12 {
        return Err(malformed(
            name,
            row_no,
            format!("expected 12 columns, got {}", row.len()),
        ));
    }
    Ok(Ticket {
        id: parse_i64(name, row_no, "id", &row[0])?,
        product: parse_index(name, row_no, "product", &row[1])?,
        status: parse_index(name, row_no, "status", &row[2])?,
        category: parse_index(name, row_no, "category", &row[3])?,
        priority: parse_index(name, row_no, "priority", &row[4])?,
        est_hours: parse_i64(name, row_no, "est_hours", &row[5])?,
        start_date: parse_date(name, row_no, "start_date", &row[6])?,
        due_date: parse_date(name, row_no, "due_date", &row[7])?,
        creator: row[8].clone(),
        title: row[9].clone(),
        description: row[10].clone(),
        assignee: row[11].clone(),
    })
}

pub fn user_to_row(user: &User) -> Vec<String> {
    vec![
        user.name.clone(),
        user.credential.clone(),
        user.admin.to_string(),
    ]
}

pub fn user_from_row(name: &str, row_no: usize, row: &[String]) -> Result<User, PersistError> {
    if row.len() != 3 {
        return Err(malformed(
            name,
            row_no,
            format!("expected 3 columns, got {}", row.len()),
        ));
    }
    let admin = row[2]
        .parse::<bool>()
        .map_err(|_| malformed(name, row_no, format!("invalid admin flag: {:?}", row[2])))?;
    Ok(User {
        name: row[0].clone(),
        credential: row[1].clone(),
        admin,
    })
}

fn rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_i64(name: &str, row_no: usize, field: &str, value: &str) -> Result<i64, PersistError> {
    value
        .parse::<i64>()
        .map_err(|_| malformed(name, row_no, format!("invalid {field}: {value:?}")))
}

fn parse_index(name: &str, row_no: usize, field: &str, value: &str) -> Result<usize, PersistError> {
    value
        .parse::<usize>()
        .map_err(|_| malformed(name, row_no, format!("invalid {field}: {value:?}")))
}

fn parse_date(
    name: &str,
    row_no: usize,
    field: &str,
    value: &str,
) -> Result<DateTime<Utc>, PersistError> {
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| malformed(name, row_no, format!("invalid {field}: {value:?}")))
}

fn malformed(name: &str, row_no: usize, message: String) -> PersistError {
    PersistError::MalformedRecord {
        name: name.to_string(),
        row: row_no,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ticket() -> Ticket {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        Ticket {
            id: 7,
            product: 1,
            status: 2,
            category: 0,
            priority: 1,
            est_hours: 16,
            start_date: start,
            due_date: start + chrono::Duration::days(30),
            creator: "user1".to_string(),
            title: "Quote \"everything\", incl. commas".to_string(),
            description: "line one".to_string(),
            assignee: "user2".to_string(),
        }
    }

    #[test]
    fn tickets_survive_the_row_codec() {
        let original = ticket();
        let row = ticket_to_row(&original);
        let decoded = ticket_from_row("tickets", 1, &row).expect("well-formed row");
        assert_eq!(decoded, original);
    }

    #[test]
    fn short_rows_are_rejected_with_the_row_number() {
        let row = vec!["1".to_string(), "2".to_string()];
        match ticket_from_row("tickets", 4, &row) {
            Err(PersistError::MalformedRecord { name, row, .. }) => {
                assert_eq!(name, "tickets");
                assert_eq!(row, 4);
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn bad_dates_are_rejected() {
        let mut row = ticket_to_row(&ticket());
        row[6] = "not-a-date".to_string();
        assert!(matches!(
            ticket_from_row("tickets", 1, &row),
            Err(PersistError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn users_survive_the_row_codec() {
        let original = User {
            name: "alice".to_string(),
            credential: "sha256$deadbeef".to_string(),
            admin: true,
        };
        let row = user_to_row(&original);
        assert_eq!(user_from_row("users", 1, &row).expect("well-formed"), original);

        let bad = vec!["alice".to_string(), "cred".to_string(), "maybe".to_string()];
        assert!(user_from_row("users", 2, &bad).is_err());
    }
}
