//! Application error types.
//!
//! The containers and algorithms never fail: emptiness and absence are
//! `Option::None`. Errors only come from the workflow and console layer.

use thiserror::Error;

use crate::types::OrderId;

/// Errors raised by the bookstore workflow and its console front end
#[derive(Error, Debug)]
pub enum BookstoreError {
    /// A container referenced an order id that is not in the store
    #[error("Order not found: {0}")]
    UnknownOrder(OrderId),

    /// Every order id up to `u64::MAX` has been handed out
    #[error("No order ids left after {0}")]
    OrderIdsExhausted(OrderId),

    /// Menu input outside the offered choices
    #[error("Invalid choice: {0}")]
    InvalidMenuChoice(String),

    /// Input that should have been a number
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Console I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for workflow operations
pub type Result<T> = std::result::Result<T, BookstoreError>;
