//! Submission drafts and the checks that run before anything mutates.

use helpdesk_core::UserTable;

use crate::catalog::Catalog;
use crate::error::ValidationError;

/// Caller-supplied fields for a new submission. The id, start date and due
/// date are assigned by the store at submission time.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub creator: String,
    pub assignee: String,
    pub product: usize,
    pub status: usize,
    pub category: usize,
    pub priority: usize,
    pub est_hours: i64,
    /// Days between the start date (stamped at submission) and the due date.
    pub due_in_days: i64,
}

/// Run every check; the first failure wins and nothing has been mutated.
pub(crate) fn validate_draft(
    draft: &TicketDraft,
    catalog: &Catalog,
    users: &UserTable,
) -> Result<(), ValidationError> {
    if draft.title.is_empty() {
        return Err(ValidationError::BlankTitle);
    }
    if draft.description.is_empty() {
        return Err(ValidationError::BlankDescription);
    }
    if draft.est_hours <= 0 {
        return Err(ValidationError::NonPositiveEstHours(draft.est_hours));
    }
    if draft.due_in_days <= 0 {
        return Err(ValidationError::NonPositiveDueOffset(draft.due_in_days));
    }
    check_option("product", draft.product, catalog.products().len())?;
    check_option("status", draft.status, catalog.statuses().len())?;
    check_option("category", draft.category, catalog.categories().len())?;
    check_option("priority", draft.priority, catalog.priorities().len())?;
    if users.find(&draft.creator).is_none() {
        return Err(ValidationError::UnknownCreator(draft.creator.clone()));
    }
    if users.find(&draft.assignee).is_none() {
        return Err(ValidationError::UnknownAssignee(draft.assignee.clone()));
    }
    Ok(())
}

fn check_option(list: &'static str, index: usize, len: usize) -> Result<(), ValidationError> {
    if index >= len {
        return Err(ValidationError::UnknownOption { list, index });
    }
    Ok(())
}
