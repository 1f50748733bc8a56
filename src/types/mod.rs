//! Core record types for the bookstore.
//!
//! ## Types
//!
//! - [`Book`]: A catalog entry (or an independent copy held by an order)
//! - [`Order`]: A customer order with its line items
//! - [`OrderId`]: Sequential order identifier, the sole identity of an order
//! - [`OrderStatus`]: Processing or Completed
//!
//! ## Comparison Keys
//!
//! The sorting and searching routines never look inside records directly.
//! They compare through two small traits defined in [`keys`]:
//!
//! - [`Titled`]: lexicographic title order (books)
//! - [`Identified`]: numeric order-id order (orders)
//!
//! ## Money
//!
//! Prices are `rust_decimal::Decimal`, never floating point. See [`price`].

mod book;
mod order;
pub mod keys;
pub mod price;

pub use book::Book;
pub use keys::{Identified, Titled};
pub use order::{Order, OrderId, OrderStatus};
