//! Bookstore order workflow.
//!
//! ## Design
//!
//! [`Bookstore`] is the whole application state, passed explicitly to
//! whoever drives it (the console menu, tests, benches):
//!
//! ```text
//!             +----------------------------+
//!             | OrderStore (owns orders)   |
//!             +----------------------------+
//!               ^ OrderId      ^ OrderId      ^ OrderId
//!   Queue<OrderId>     Stack<OrderId>     SinglyLinkedList<OrderId>
//!   (pending)          (recent)           (processed, newest first)
//! ```
//!
//! Containers hold ids, never orders, so an order can be pending and recent
//! at the same time with a single owner.
//!
//! ## Example
//!
//! ```
//! use bookstore_orders::{Bookstore, BookstoreConfig, OrderStatus};
//!
//! let mut store = Bookstore::new(BookstoreConfig::default());
//! let id = store.create_order("Dana", "42 Elm St", &[1, 3])?;
//!
//! // Three sample orders are ahead of the new one
//! for _ in 0..3 {
//!     store.process_next_order().unwrap();
//! }
//! let processed = store.process_next_order().unwrap().unwrap();
//! assert_eq!(processed.id, id);
//! assert_eq!(processed.status, OrderStatus::Completed);
//! # Ok::<(), bookstore_orders::BookstoreError>(())
//! ```

pub mod performance;
pub mod sample;

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::algorithms::{binary_search, linear_search, SearchAlgorithm, SortAlgorithm};
use crate::config::BookstoreConfig;
use crate::containers::{Queue, SinglyLinkedList, Stack};
use crate::error::{BookstoreError, Result};
use crate::store::OrderStore;
use crate::types::{Book, Order, OrderId};

use performance::PerformanceReport;

// ============================================================================
// Reports
// ============================================================================

/// Result of [`Bookstore::sort_sample`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    /// Books in their original order
    pub original: Vec<Book>,
    /// The same books after sorting
    pub sorted: Vec<Book>,
    pub elapsed: Duration,
}

/// One search run inside a [`SearchReport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub algorithm: SearchAlgorithm,
    pub found: Option<OrderId>,
    pub elapsed: Duration,
}

/// Result of [`Bookstore::search_order`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub target: OrderId,
    /// Over orders in insertion order
    pub linear: SearchOutcome,
    /// Over an id-sorted copy
    pub binary: SearchOutcome,
}

// ============================================================================
// Bookstore
// ============================================================================

/// Catalog, orders and the three workflow containers
#[derive(Debug)]
pub struct Bookstore {
    config: BookstoreConfig,

    catalog: Vec<Book>,

    /// Owner of every order
    orders: OrderStore,

    /// Orders waiting to be processed (FIFO)
    pending: Queue<OrderId>,

    /// Recently created orders (LIFO)
    recent: Stack<OrderId>,

    /// Processed orders, most recent at the head
    processed: SinglyLinkedList<OrderId>,
}

impl Default for Bookstore {
    fn default() -> Self {
        Self::new(BookstoreConfig::default())
    }
}

impl Bookstore {
    /// Create a bookstore, loading sample data if the config asks for it
    pub fn new(config: BookstoreConfig) -> Self {
        let mut bookstore = Self {
            orders: OrderStore::new(config.first_order_id),
            config,
            catalog: Vec::new(),
            pending: Queue::new(),
            recent: Stack::new(),
            processed: SinglyLinkedList::new(),
        };

        if bookstore.config.seed_sample_data {
            bookstore.seed_sample_data();
        }

        bookstore
    }

    /// Load the sample catalog and create the sample orders.
    ///
    /// Order `i` (0-based) gets catalog books `i` and `i + 1`. Sample orders
    /// are queued for processing but not pushed on the recent stack. Only a
    /// bookstore with no books and no orders is seeded.
    fn seed_sample_data(&mut self) {
        if !self.catalog.is_empty() || !self.orders.is_empty() {
            debug!("bookstore already holds data, sample data skipped");
            return;
        }

        self.catalog.extend(sample::sample_catalog());

        for i in 0..sample::SAMPLE_ORDER_COUNT {
            let created = self.orders.create(
                format!("Customer {}", i + 1),
                format!("Address {}", i + 1),
                Utc::now(),
            );
            let id = match created {
                Ok(id) => id,
                Err(err) => {
                    warn!(error = %err, "sample orders truncated");
                    break;
                }
            };

            let len = self.catalog.len();
            let books = [self.catalog[i % len].clone(), self.catalog[(i + 1) % len].clone()];
            if let Some(order) = self.orders.get_mut(id) {
                for book in books {
                    order.add_book(book);
                }
            }

            self.pending.enqueue(id);
        }

        info!(
            books = self.catalog.len(),
            orders = self.orders.len(),
            "sample data loaded"
        );
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &BookstoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[Book] {
        &self.catalog
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// All orders in creation order
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Pending order ids, front to rear
    pub fn pending_ids(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.pending.iter().copied()
    }

    /// Recent order ids, top to bottom
    pub fn recent_ids(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.recent.iter().copied()
    }

    /// Processed order ids, most recent first
    pub fn processed_ids(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.processed.iter().copied()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    // ========================================================================
    // Order creation
    // ========================================================================

    /// Create an order from 1-based catalog numbers.
    ///
    /// Each valid number adds a single copy of that catalog book. Numbers
    /// outside the catalog are skipped. The order is queued for processing
    /// and pushed on the recent stack.
    pub fn create_order(
        &mut self,
        customer_name: impl Into<String>,
        shipping_address: impl Into<String>,
        selections: &[usize],
    ) -> Result<OrderId> {
        let books: Vec<Book> = selections
            .iter()
            .filter_map(|&number| {
                let book = number.checked_sub(1).and_then(|i| self.catalog.get(i));
                if book.is_none() {
                    warn!(number, catalog = self.catalog.len(), "skipping unknown book number");
                }
                book.map(|b| b.with_quantity(1))
            })
            .collect();

        let id = self.orders.create(customer_name, shipping_address, Utc::now())?;
        if let Some(order) = self.orders.get_mut(id) {
            for book in books {
                order.add_book(book);
            }
        }

        self.pending.enqueue(id);
        self.recent.push(id);

        info!(order_id = id.get(), pending = self.pending.len(), "order created");
        Ok(id)
    }

    /// Queue a walk-in order for `customer_name` holding the first catalog
    /// book. It is not pushed on the recent stack.
    pub fn enqueue_walk_in(&mut self, customer_name: impl Into<String>) -> Result<OrderId> {
        let first_book = self.catalog.first().cloned();

        let id = self.orders.create(customer_name, "Sample Address", Utc::now())?;
        if let (Some(order), Some(book)) = (self.orders.get_mut(id), first_book) {
            order.add_book(book);
        }

        self.pending.enqueue(id);
        debug!(order_id = id.get(), "walk-in order enqueued");
        Ok(id)
    }

    // ========================================================================
    // Recent orders (stack)
    // ========================================================================

    /// Replace the recent stack with the first `count` stored orders,
    /// pushed oldest first. Returns the pushed ids in push order.
    pub fn rebuild_recent_stack(&mut self, count: usize) -> Vec<OrderId> {
        let ids: Vec<OrderId> = self.orders.iter().take(count).map(|o| o.id).collect();

        self.recent = Stack::with_capacity(ids.len());
        for &id in &ids {
            self.recent.push(id);
        }

        debug!(pushed = ids.len(), "recent stack rebuilt");
        ids
    }

    /// Most recent order without removing it
    pub fn peek_recent(&self) -> Option<&Order> {
        self.recent.peek().and_then(|&id| self.orders.get(id))
    }

    /// Remove the most recent order from the stack and return it
    pub fn pop_recent(&mut self) -> Option<&Order> {
        let id = self.recent.pop()?;
        self.orders.get(id)
    }

    // ========================================================================
    // Processing (queue)
    // ========================================================================

    /// Next order to be processed
    pub fn front_of_queue(&self) -> Option<&Order> {
        self.pending.front().and_then(|&id| self.orders.get(id))
    }

    /// Dequeue the front order, mark it completed and record it in the
    /// processed history.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(order))` - The processed order
    /// * `Ok(None)` - Nothing was pending
    ///
    /// # Errors
    ///
    /// [`BookstoreError::UnknownOrder`] if the queued id has no stored order.
    pub fn process_next_order(&mut self) -> Result<Option<&Order>> {
        let Some(id) = self.pending.dequeue() else {
            debug!("no pending orders");
            return Ok(None);
        };

        self.orders
            .get_mut(id)
            .ok_or(BookstoreError::UnknownOrder(id))?
            .complete();
        self.processed.insert_at_front(id);

        info!(order_id = id.get(), pending = self.pending.len(), "order processed");
        Ok(self.orders.get(id))
    }

    /// Whether `id` has gone through [`Self::process_next_order`]
    pub fn was_processed(&self, id: OrderId) -> bool {
        self.processed.find_by_id(id).is_some()
    }

    // ========================================================================
    // Searching and sorting
    // ========================================================================

    /// Find an order by id with a linear scan over all orders
    pub fn find_order(&self, id: OrderId) -> Option<&Order> {
        let orders = self.orders.to_vec();
        linear_search(&orders, id).copied()
    }

    /// Look `id` up with both searches and time them.
    ///
    /// Linear search runs over orders in creation order; binary search runs
    /// over an id-sorted copy so its precondition holds.
    pub fn search_order(&self, id: OrderId) -> SearchReport {
        let orders = self.orders.to_vec();
        let start = Instant::now();
        let found = linear_search(&orders, id).map(|o| o.id);
        let linear = SearchOutcome {
            algorithm: SearchAlgorithm::Linear,
            found,
            elapsed: start.elapsed(),
        };

        let sorted = self.orders.sorted_by_id();
        let start = Instant::now();
        let found = binary_search(&sorted, id).map(|o| o.id);
        let binary = SearchOutcome {
            algorithm: SearchAlgorithm::Binary,
            found,
            elapsed: start.elapsed(),
        };

        SearchReport {
            target: id,
            linear,
            binary,
        }
    }

    /// Catalog copies used by the sorting demo: books at `(i * 2) % len`
    pub fn sort_sample_books(&self) -> Vec<Book> {
        if self.catalog.is_empty() {
            return Vec::new();
        }

        (0..self.config.sort_sample_size)
            .map(|i| self.catalog[(i * 2) % self.catalog.len()].clone())
            .collect()
    }

    /// Sort the demo books with `algorithm` and time it
    pub fn sort_sample(&self, algorithm: SortAlgorithm) -> SortReport {
        let original = self.sort_sample_books();
        let mut sorted = original.clone();

        let start = Instant::now();
        algorithm.sort(&mut sorted);
        let elapsed = start.elapsed();

        debug!(algorithm = algorithm.name(), books = sorted.len(), ?elapsed, "sample sorted");

        SortReport {
            algorithm,
            original,
            sorted,
            elapsed,
        }
    }

    /// Time every algorithm on `size` generated elements
    pub fn compare_performance(&self, size: usize) -> PerformanceReport {
        info!(size, seed = self.config.perf_seed, "running performance comparison");
        performance::compare(size, self.config.perf_seed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderStatus;

    fn empty_store() -> Bookstore {
        Bookstore::new(BookstoreConfig {
            seed_sample_data: false,
            ..BookstoreConfig::default()
        })
    }

    #[test]
    fn test_seeded_state() {
        let store = Bookstore::default();

        assert_eq!(store.catalog().len(), 8);
        assert_eq!(store.order_count(), 3);
        assert_eq!(
            store.pending_ids().collect::<Vec<_>>(),
            vec![OrderId(1001), OrderId(1002), OrderId(1003)]
        );
        assert_eq!(store.recent_ids().count(), 0);

        let first = store.order(OrderId(1001)).unwrap();
        assert_eq!(first.customer_name, "Customer 1");
        assert_eq!(first.shipping_address, "Address 1");
        let titles: Vec<&str> = first.line_items.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Java Programming", "Data Structures"]);
    }

    #[test]
    fn test_seeding_runs_once() {
        let mut store = Bookstore::default();
        store.seed_sample_data();

        assert_eq!(store.catalog().len(), 8);
        assert_eq!(store.order_count(), 3);
        assert_eq!(store.pending_count(), 3);
    }

    #[test]
    fn test_seeding_near_last_id() {
        let store = Bookstore::new(BookstoreConfig {
            first_order_id: OrderId(u64::MAX - 1),
            ..BookstoreConfig::default()
        });

        // Only two ids are left for the three sample orders
        assert_eq!(store.catalog().len(), 8);
        assert_eq!(
            store.pending_ids().collect::<Vec<_>>(),
            vec![OrderId(u64::MAX - 1), OrderId(u64::MAX)]
        );
    }

    #[test]
    fn test_create_order_after_last_id() {
        let mut store = Bookstore::new(BookstoreConfig {
            first_order_id: OrderId(u64::MAX),
            seed_sample_data: false,
            ..BookstoreConfig::default()
        });

        assert_eq!(store.create_order("Ana", "Street", &[]).unwrap(), OrderId(u64::MAX));
        assert!(matches!(
            store.create_order("Bo", "Street", &[]),
            Err(BookstoreError::OrderIdsExhausted(_))
        ));
        assert!(store.enqueue_walk_in("Cy").is_err());

        // Failed creations leave the containers alone
        assert_eq!(store.pending_count(), 1);
        assert_eq!(store.recent_ids().collect::<Vec<_>>(), vec![OrderId(u64::MAX)]);
    }

    #[test]
    fn test_unseeded_state() {
        let store = empty_store();

        assert!(store.catalog().is_empty());
        assert_eq!(store.order_count(), 0);
        assert!(store.front_of_queue().is_none());
        assert!(store.sort_sample_books().is_empty());
    }

    #[test]
    fn test_create_order_skips_unknown_numbers() {
        let mut store = Bookstore::default();
        let id = store.create_order("Dana", "42 Elm St", &[0, 2, 9, 8]).unwrap();

        assert_eq!(id, OrderId(1004));
        let order = store.order(id).unwrap();
        let titles: Vec<&str> = order.line_items.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Data Structures", "Cloud Computing"]);
        assert!(order.line_items.iter().all(|b| b.quantity == 1));

        // Catalog stock untouched
        assert_eq!(store.catalog()[1].quantity, 8);

        assert_eq!(store.peek_recent().map(|o| o.id), Some(id));
        assert_eq!(store.pending_ids().last(), Some(id));
    }

    #[test]
    fn test_enqueue_walk_in() {
        let mut store = Bookstore::default();
        let id = store.enqueue_walk_in("Eve").unwrap();

        let order = store.order(id).unwrap();
        assert_eq!(order.shipping_address, "Sample Address");
        assert_eq!(order.line_items[0].title, "Java Programming");
        assert_eq!(store.pending_count(), 4);
        assert!(store.peek_recent().is_none());
    }

    #[test]
    fn test_walk_in_with_empty_catalog() {
        let mut store = empty_store();
        let id = store.enqueue_walk_in("Eve").unwrap();

        assert!(store.order(id).unwrap().line_items.is_empty());
    }

    #[test]
    fn test_recent_stack_demo() {
        let mut store = Bookstore::default();
        let pushed = store.rebuild_recent_stack(3);

        assert_eq!(pushed, vec![OrderId(1001), OrderId(1002), OrderId(1003)]);
        assert_eq!(store.peek_recent().unwrap().id, OrderId(1003));
        assert_eq!(store.pop_recent().unwrap().id, OrderId(1003));
        assert_eq!(store.recent_ids().collect::<Vec<_>>(), vec![OrderId(1002), OrderId(1001)]);

        assert_eq!(store.pop_recent().unwrap().id, OrderId(1002));
        assert_eq!(store.pop_recent().unwrap().id, OrderId(1001));
        assert!(store.pop_recent().is_none());
        assert!(store.peek_recent().is_none());
    }

    #[test]
    fn test_process_orders_in_fifo_order() {
        let mut store = Bookstore::default();

        for expected in [1001, 1002, 1003] {
            let order = store.process_next_order().unwrap().unwrap();
            assert_eq!(order.id, OrderId(expected));
            assert_eq!(order.status, OrderStatus::Completed);
        }

        assert!(store.process_next_order().unwrap().is_none());
        assert_eq!(
            store.processed_ids().collect::<Vec<_>>(),
            vec![OrderId(1003), OrderId(1002), OrderId(1001)]
        );
        assert!(store.was_processed(OrderId(1002)));
        assert!(!store.was_processed(OrderId(1004)));
    }

    #[test]
    fn test_find_order() {
        let store = Bookstore::default();

        assert_eq!(store.find_order(OrderId(1002)).unwrap().customer_name, "Customer 2");
        assert!(store.find_order(OrderId(9999)).is_none());
    }

    #[test]
    fn test_search_order_report() {
        let store = Bookstore::default();

        let report = store.search_order(OrderId(1002));
        assert_eq!(report.target, OrderId(1002));
        assert_eq!(report.linear.found, Some(OrderId(1002)));
        assert_eq!(report.binary.found, Some(OrderId(1002)));

        let report = store.search_order(OrderId(9999));
        assert!(report.linear.found.is_none());
        assert!(report.binary.found.is_none());
    }

    #[test]
    fn test_sort_sample() {
        let store = Bookstore::default();

        for algorithm in SortAlgorithm::ALL {
            let report = store.sort_sample(algorithm);
            let original: Vec<&str> = report.original.iter().map(|b| b.title.as_str()).collect();
            let sorted: Vec<&str> = report.sorted.iter().map(|b| b.title.as_str()).collect();

            assert_eq!(
                original,
                vec![
                    "Java Programming",
                    "Algorithms Design",
                    "Web Development",
                    "Machine Learning",
                    "Java Programming",
                ]
            );
            assert_eq!(
                sorted,
                vec![
                    "Algorithms Design",
                    "Java Programming",
                    "Java Programming",
                    "Machine Learning",
                    "Web Development",
                ],
                "{}",
                algorithm
            );
        }
    }

    #[test]
    fn test_compare_performance_uses_config_seed() {
        let store = Bookstore::default();
        let report = store.compare_performance(50);

        assert_eq!(report.size, 50);
        assert!(report.sorts.iter().all(|t| t.sorted));
    }
}
