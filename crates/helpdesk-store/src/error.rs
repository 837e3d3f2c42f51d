//! Typed failures reported to callers before any structure is touched.

/// Rejected ticket submissions. Validation happens up front, so a failed
/// submission never leaves partial state behind.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title cannot be blank")]
    BlankTitle,

    #[error("description cannot be blank")]
    BlankDescription,

    #[error("estimated hours must be positive (got {0})")]
    NonPositiveEstHours(i64),

    #[error("due date offset must be positive (got {0} days)")]
    NonPositiveDueOffset(i64),

    #[error("no {list} option at index {index}")]
    UnknownOption { list: &'static str, index: usize },

    #[error("creator is not a known user: {0}")]
    UnknownCreator(String),

    #[error("assignee is not a known user: {0}")]
    UnknownAssignee(String),
}

/// Rejected account creation or edits.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("username cannot be blank")]
    BlankName,

    #[error("password cannot be blank")]
    BlankSecret,

    #[error("passwords entered do not match")]
    SecretMismatch,

    #[error("username already taken: {0}")]
    Duplicate(String),

    #[error("user not found: {0}")]
    NotFound(String),
}

/// Failed sign-in. Deliberately does not say which half was wrong.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("username and/or password do not match")]
    InvalidCredentials,
}

/// Rejected catalog management operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("product name cannot be blank")]
    BlankProduct,

    #[error("product name already exists: {0}")]
    DuplicateProduct(String),

    #[error("no product at index {0}")]
    UnknownProduct(usize),
}
