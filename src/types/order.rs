//! Order types for the bookstore workflow.
//!
//! ## Identity
//!
//! An order is identified by its [`OrderId`] alone. Ids are handed out by
//! [`crate::store::OrderStore`] from a monotonically increasing counter, so
//! they are unique and their numeric order matches creation order.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::types::Book;

// ============================================================================
// OrderId
// ============================================================================

/// Sequential order identifier.
///
/// Displayed as `#1001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OrderId(pub u64);

impl OrderId {
    /// Raw numeric value
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one, or `None` at `u64::MAX`
    #[inline]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(OrderId)
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        OrderId(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// OrderStatus enum
// ============================================================================

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    /// Waiting in the processing queue
    #[default]
    Processing,
    /// Dequeued and handled
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A customer order.
///
/// Line items keep insertion order and may contain duplicates.
///
/// ## Example
///
/// ```
/// use bookstore_orders::types::{Book, Order, OrderId, OrderStatus};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let mut order = Order::new(OrderId(1001), "Customer 1", "Address 1", Utc::now());
/// order.add_book(Book::new("001", "Java Programming", "John Smith", Decimal::new(4599, 2), 1));
///
/// assert_eq!(order.status, OrderStatus::Processing);
/// assert_eq!(order.line_items.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,

    pub customer_name: String,

    pub shipping_address: String,

    /// Books in the order, in the order they were added
    pub line_items: Vec<Book>,

    /// When the order was created (supplied by the caller)
    pub created_at: DateTime<Utc>,

    pub status: OrderStatus,
}

impl Order {
    /// Create a new order with no line items and `Processing` status
    pub fn new(
        id: OrderId,
        customer_name: impl Into<String>,
        shipping_address: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            shipping_address: shipping_address.into(),
            line_items: Vec::new(),
            created_at,
            status: OrderStatus::Processing,
        }
    }

    /// Append a line item
    pub fn add_book(&mut self, book: Book) {
        self.line_items.push(book);
    }

    /// Mark the order as handled
    pub fn complete(&mut self) {
        self.status = OrderStatus::Completed;
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
