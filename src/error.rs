//! Cart Errors
//!
//! Everything here ends up in the alert banner or the console, never rethrown.

use thiserror::Error;

use crate::models::{MAX_QUANTITY, MIN_QUANTITY};

/// Input rejected before any request is sent.
/// `Display` is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid quantity")]
    NotANumber,
    #[error("Please enter a quantity between {} and {}", MIN_QUANTITY, MAX_QUANTITY)]
    OutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-200 response; displays as the raw body the server sent
    #[error("{body}")]
    Status { status: u16, body: String },

    /// No response at all (fetch rejected, no window, ...)
    #[error("network error: {0}")]
    Network(String),

    #[error("missing page element `{0}`")]
    MissingElement(String),

    #[error("invalid page data: {0}")]
    PageData(String),
}
