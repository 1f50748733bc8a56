//! # Bookstore Orders
//!
//! Bookstore order workflow built on hand-written data structures and
//! textbook algorithms.
//!
//! ## Architecture
//!
//! - **Types**: Core records (Book, Order, OrderId) and comparison keys
//! - **Containers**: Stack, slab-backed Queue, singly linked list
//! - **Algorithms**: Five title sorts, linear and binary order search
//! - **Store**: Single-owner arena of orders, indexed by id
//! - **Bookstore**: Application state tying catalog, store and containers together
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: Orders live in the store; containers hold ids
//! 2. **No Floating Point for Money**: Prices are `rust_decimal::Decimal`
//! 3. **Absence is not an Error**: Empty containers and failed lookups return `None`
//! 4. **Synchronous Execution**: One thread, every call runs to completion
//! 5. **Structured Results**: The library returns values; printing is the binary's job

// ============================================================================
// Module declarations
// ============================================================================

/// Record types: Book, Order, OrderId, comparison keys
pub mod types;

/// Stack, Queue, SinglyLinkedList
pub mod containers;

/// Sorting and searching
pub mod algorithms;

/// Order arena
pub mod store;

/// Application state and workflow
pub mod bookstore;

pub mod config;
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Book, Identified, Order, OrderId, OrderStatus, Titled};
pub use containers::{Queue, SinglyLinkedList, Stack};
pub use algorithms::{SearchAlgorithm, SortAlgorithm};
pub use store::OrderStore;
pub use bookstore::{Bookstore, SearchReport, SortReport};
pub use config::BookstoreConfig;
pub use error::BookstoreError;
