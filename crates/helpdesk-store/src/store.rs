//! The record store: canonical shared state behind an explicit concurrency
//! discipline.
//!
//! Each structure sits behind its own single-writer/multi-reader lock, so
//! independent callers may read concurrently while writes serialize.
//! Operations that need more than one lock take them in a fixed order:
//! catalog, then tickets, then submissions, then users. Read-side view
//! construction clones a snapshot under the read guard and releases it
//! before traversing (see `views`).

use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Duration, Utc};
use helpdesk_core::{
    QueueError, SubmissionQueue, Ticket, TicketOrder, TicketTree, User, UserTable,
};
use tracing::info;

use crate::auth::CredentialHasher;
use crate::catalog::Catalog;
use crate::error::{AuthError, CatalogError, UserError, ValidationError};
use crate::validate::{self, TicketDraft};

/// Request to create an account.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub secret: String,
    pub confirm: String,
    pub admin: bool,
}

/// Partial account change; absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UserEdit {
    pub name: Option<String>,
    pub secret: Option<String>,
    pub admin: Option<bool>,
}

/// Outcome of a product removal cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedProduct {
    pub name: String,
    pub tickets_removed: usize,
    pub submissions_removed: usize,
}

pub struct RecordStore {
    catalog: RwLock<Catalog>,
    tickets: RwLock<TicketTree>,
    submissions: RwLock<SubmissionQueue>,
    users: RwLock<UserTable>,
    next_id: AtomicI64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl RecordStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            tickets: RwLock::new(TicketTree::default()),
            submissions: RwLock::new(SubmissionQueue::new()),
            users: RwLock::new(UserTable::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Rebuild a store from persisted parts. The canonical log must be
    /// id-ordered; the id counter resumes above the highest id seen in
    /// either the log or the queue.
    pub fn from_parts(
        catalog: Catalog,
        tickets: TicketTree,
        submissions: SubmissionQueue,
        users: UserTable,
    ) -> Self {
        debug_assert_eq!(tickets.order(), TicketOrder::Id);
        let max_logged = tickets.iter().map(|t| t.id).max().unwrap_or(0);
        let max_queued = submissions.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            catalog: RwLock::new(catalog),
            tickets: RwLock::new(tickets),
            submissions: RwLock::new(submissions),
            users: RwLock::new(users),
            next_id: AtomicI64::new(max_logged.max(max_queued) + 1),
        }
    }

    // ── Submissions ──

    /// Validate a draft and queue it as a submission. All checks run before
    /// any structure is touched; on success the assigned id is returned.
    pub fn submit(&self, draft: TicketDraft) -> Result<i64, ValidationError> {
        {
            let catalog = self.catalog_read();
            let users = self.users_read();
            validate::validate_draft(&draft, &catalog, &users)?;
        }

        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let start_date = Utc::now();
        let ticket = Ticket {
            id,
            product: draft.product,
            status: draft.status,
            category: draft.category,
            priority: draft.priority,
            est_hours: draft.est_hours,
            start_date,
            due_date: start_date + Duration::days(draft.due_in_days),
            creator: draft.creator,
            title: draft.title,
            description: draft.description,
            assignee: draft.assignee,
        };
        self.submissions_write().push(ticket);
        info!(id, "ticket submitted");
        Ok(id)
    }

    /// Queued submissions in storage order, for display rows.
    pub fn list_submissions(&self) -> Vec<Ticket> {
        self.submissions_read().iter().cloned().collect()
    }

    /// Pop the first-in-line submission and insert it into the canonical
    /// log.
    pub fn approve_top(&self) -> Result<Ticket, QueueError> {
        let mut tickets = self.tickets_write();
        let mut submissions = self.submissions_write();
        let approved = submissions.pop()?;
        tickets.insert(approved.clone());
        info!(id = approved.id, "submission approved");
        Ok(approved)
    }

    /// Pop the first-in-line submission and discard it.
    pub fn reject_top(&self) -> Result<Ticket, QueueError> {
        let rejected = self.submissions_write().pop()?;
        info!(id = rejected.id, "submission rejected");
        Ok(rejected)
    }

    /// Remove a queued submission by id, from any position. Unknown ids are
    /// a no-op.
    pub fn withdraw_submission(&self, id: i64) -> Option<Ticket> {
        let withdrawn = self.submissions_write().remove(id);
        if withdrawn.is_some() {
            info!(id, "submission withdrawn");
        }
        withdrawn
    }

    pub fn submission_count(&self) -> usize {
        self.submissions_read().len()
    }

    // ── Ticket log ──

    /// Insert a ticket directly into the canonical log, keeping the id
    /// counter ahead of it.
    pub fn add_ticket(&self, ticket: Ticket) {
        self.next_id.fetch_max(ticket.id + 1, AtomicOrdering::SeqCst);
        self.tickets_write().insert(ticket);
    }

    /// Delete a logged ticket; deleting an unknown id is a no-op.
    pub fn delete_ticket(&self, id: i64) -> Option<Ticket> {
        let deleted = self.tickets_write().remove(id);
        if deleted.is_some() {
            info!(id, "ticket deleted");
        }
        deleted
    }

    pub fn find_ticket(&self, id: i64) -> Option<Ticket> {
        self.tickets_read().get(id).cloned()
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets_read().len()
    }

    // ── Users ──

    /// Create an account from a signup request. Checks blank fields, the
    /// password confirmation, and name uniqueness before inserting.
    pub fn sign_up(
        &self,
        request: SignupRequest,
        hasher: &dyn CredentialHasher,
    ) -> Result<User, UserError> {
        if request.name.is_empty() {
            return Err(UserError::BlankName);
        }
        if request.secret.is_empty() {
            return Err(UserError::BlankSecret);
        }
        if request.secret != request.confirm {
            return Err(UserError::SecretMismatch);
        }

        let mut users = self.users_write();
        if users.find(&request.name).is_some() {
            return Err(UserError::Duplicate(request.name));
        }
        let user = User {
            name: request.name,
            credential: hasher.hash(&request.secret),
            admin: request.admin,
        };
        users.insert(user.clone());
        info!(name = %user.name, admin = user.admin, "account created");
        Ok(user)
    }

    /// Insert an already-credentialed account (archive load, seeding).
    pub fn add_user(&self, user: User) -> Result<(), UserError> {
        let mut users = self.users_write();
        if users.find(&user.name).is_some() {
            return Err(UserError::Duplicate(user.name));
        }
        users.insert(user);
        Ok(())
    }

    pub fn authenticate(
        &self,
        name: &str,
        secret: &str,
        hasher: &dyn CredentialHasher,
    ) -> Result<User, AuthError> {
        let users = self.users_read();
        let user = users.find(name).ok_or(AuthError::InvalidCredentials)?;
        if !hasher.verify(secret, &user.credential) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user.clone())
    }

    /// Apply a partial edit to the account stored under `name`.
    ///
    /// The table re-keys by delete-and-reinsert, so any account value
    /// fetched before the edit is stale afterwards; re-fetch by the (new)
    /// name.
    pub fn edit_user(
        &self,
        name: &str,
        change: UserEdit,
        hasher: &dyn CredentialHasher,
    ) -> Result<User, UserError> {
        let mut users = self.users_write();
        let mut edited = users
            .find(name)
            .ok_or_else(|| UserError::NotFound(name.to_string()))?
            .clone();

        if let Some(new_name) = change.name {
            if new_name.is_empty() {
                return Err(UserError::BlankName);
            }
            if new_name != name && users.find(&new_name).is_some() {
                return Err(UserError::Duplicate(new_name));
            }
            edited.name = new_name;
        }
        if let Some(secret) = change.secret {
            if secret.is_empty() {
                return Err(UserError::BlankSecret);
            }
            edited.credential = hasher.hash(&secret);
        }
        if let Some(admin) = change.admin {
            edited.admin = admin;
        }

        users.edit(name, edited.clone());
        info!(name = %edited.name, "account edited");
        Ok(edited)
    }

    /// Delete an account; deleting an unknown name is a no-op.
    pub fn delete_user(&self, name: &str) -> Option<User> {
        let removed = self.users_write().remove(name);
        if removed.is_some() {
            info!(name, "account deleted");
        }
        removed
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users_read().iter().cloned().collect()
    }

    // ── Catalog ──

    pub fn products(&self) -> Vec<String> {
        self.catalog_read().products().to_vec()
    }

    pub fn add_product(&self, name: &str) -> Result<usize, CatalogError> {
        let index = self.catalog_write().add_product(name)?;
        info!(product = name, "product added");
        Ok(index)
    }

    pub fn rename_product(&self, index: usize, name: &str) -> Result<(), CatalogError> {
        self.catalog_write().rename_product(index, name)?;
        info!(index, product = name, "product renamed");
        Ok(())
    }

    /// Remove a product option and cascade over the records holding it:
    /// every logged ticket and queued submission carrying the removed code
    /// is deleted, and higher product codes shift down by one so they keep
    /// naming the same options.
    pub fn remove_product(&self, index: usize) -> Result<RemovedProduct, CatalogError> {
        let mut catalog = self.catalog_write();
        let mut tickets = self.tickets_write();
        let mut submissions = self.submissions_write();

        let name = catalog.remove_product(index)?;

        let (rebuilt_log, tickets_removed) = {
            let mut remaining: Vec<Ticket> = tickets.iter().cloned().collect();
            let before = remaining.len();
            remaining.retain(|ticket| ticket.product != index);
            let removed = before - remaining.len();
            let mut rebuilt = TicketTree::new(TicketOrder::Id);
            for mut ticket in remaining {
                if ticket.product > index {
                    ticket.product -= 1;
                }
                rebuilt.insert(ticket);
            }
            (rebuilt, removed)
        };
        *tickets = rebuilt_log;

        let (rebuilt_queue, submissions_removed) = {
            let mut remaining: Vec<Ticket> = submissions.iter().cloned().collect();
            let before = remaining.len();
            remaining.retain(|ticket| ticket.product != index);
            let removed = before - remaining.len();
            let mut rebuilt = SubmissionQueue::new();
            for mut ticket in remaining {
                if ticket.product > index {
                    ticket.product -= 1;
                }
                rebuilt.push(ticket);
            }
            (rebuilt, removed)
        };
        *submissions = rebuilt_queue;

        info!(
            product = %name,
            tickets_removed,
            submissions_removed,
            "product removed"
        );
        Ok(RemovedProduct {
            name,
            tickets_removed,
            submissions_removed,
        })
    }

    // ── Snapshots ──

    /// Clone of the canonical log for persistence or read-side fan-out.
    pub fn tickets_snapshot(&self) -> TicketTree {
        self.tickets_read().clone()
    }

    pub fn submissions_snapshot(&self) -> SubmissionQueue {
        self.submissions_read().clone()
    }

    pub fn users_snapshot(&self) -> UserTable {
        self.users_read().clone()
    }

    pub fn catalog_snapshot(&self) -> Catalog {
        self.catalog_read().clone()
    }

    // ── Lock plumbing ──

    fn catalog_read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().expect("catalog lock poisoned")
    }

    fn catalog_write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().expect("catalog lock poisoned")
    }

    pub(crate) fn tickets_read(&self) -> RwLockReadGuard<'_, TicketTree> {
        self.tickets.read().expect("ticket log lock poisoned")
    }

    fn tickets_write(&self) -> RwLockWriteGuard<'_, TicketTree> {
        self.tickets.write().expect("ticket log lock poisoned")
    }

    fn submissions_read(&self) -> RwLockReadGuard<'_, SubmissionQueue> {
        self.submissions.read().expect("submission queue lock poisoned")
    }

    fn submissions_write(&self) -> RwLockWriteGuard<'_, SubmissionQueue> {
        self.submissions.write().expect("submission queue lock poisoned")
    }

    fn users_read(&self) -> RwLockReadGuard<'_, UserTable> {
        self.users.read().expect("user table lock poisoned")
    }

    fn users_write(&self) -> RwLockWriteGuard<'_, UserTable> {
        self.users.write().expect("user table lock poisoned")
    }
}
