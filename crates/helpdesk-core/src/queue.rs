//! Submission queue: pending tickets ordered by urgency.
//!
//! A dense, 0-indexed `Vec` satisfying the binary min-heap property under
//! the urgency comparator: the lower priority number is first in line, and
//! equal priorities are broken by the earlier due date.

use crate::ticket::Ticket;

/// Errors raised by submission queue operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// Popping an empty queue is a precondition violation, never a silent
    /// no-op.
    #[error("submission queue is empty")]
    Empty,
}

/// Array-backed priority heap of tickets awaiting an admin decision.
#[derive(Debug, Clone, Default)]
pub struct SubmissionQueue {
    items: Vec<Ticket>,
}

impl SubmissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tickets in storage (level) order, for display rows.
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.items.iter()
    }

    /// The ticket an admin would act on next, if any.
    pub fn peek(&self) -> Option<&Ticket> {
        self.items.first()
    }

    /// Append at the end of the sequence, then sift up until the parent is
    /// first in line relative to the new ticket.
    pub fn push(&mut self, ticket: Ticket) {
        self.items.push(ticket);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the globally first-in-line ticket: the last element
    /// moves into index 0, the sequence shrinks by one, and the moved
    /// element sifts down from the root.
    pub fn pop(&mut self) -> Result<Ticket, QueueError> {
        if self.items.is_empty() {
            return Err(QueueError::Empty);
        }
        let popped = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(popped)
    }

    /// Index of the ticket with `id`, by linear scan; heap order supports
    /// nothing faster for id lookups.
    pub fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|ticket| ticket.id == id)
    }

    /// Remove the ticket with `id` from an arbitrary position: swap it with
    /// the last element, shrink, then re-heapify the whole array. Returns
    /// `None` when no such ticket is queued.
    pub fn remove(&mut self, id: i64) -> Option<Ticket> {
        let index = self.position(id)?;
        let removed = self.items.swap_remove(index);
        self.rebuild();
        Some(removed)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !first_in_line(&self.items[index], &self.items[parent]) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    /// Compare against both children (where present) and descend into
    /// whichever child is first in line, until the heap property holds.
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let mut next = index;
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left < self.items.len() && first_in_line(&self.items[left], &self.items[next]) {
                next = left;
            }
            if right < self.items.len() && first_in_line(&self.items[right], &self.items[next]) {
                next = right;
            }
            if next == index {
                break;
            }
            self.items.swap(index, next);
            index = next;
        }
    }

    /// Bottom-up heapify over the whole array.
    fn rebuild(&mut self) {
        for index in (0..self.items.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

/// Whether `a` is strictly more urgent than `b`.
fn first_in_line(a: &Ticket, b: &Ticket) -> bool {
    (a.priority, a.due_date) < (b.priority, b.due_date)
}
