//! Single-owner arena of orders.
//!
//! ## Architecture
//!
//! - **Slab**: Owns every `Order`; O(1) insert and lookup by slab key
//! - **HashMap**: Order id to slab key mapping for O(1) lookup by id
//! - **Counter**: Next order id, monotonically increasing; `None` once
//!   `u64::MAX` has been assigned
//!
//! The workflow containers (queue, stack, processed history) hold
//! [`OrderId`]s only. The same order can sit in the queue and on the stack
//! at once without either container owning or copying it.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Keys are reused after removal (orders are never removed here, so slab
//!   key order is insertion order)
//!
//! ## Example
//!
//! ```
//! use bookstore_orders::store::OrderStore;
//! use bookstore_orders::types::OrderId;
//! use chrono::Utc;
//!
//! let mut store = OrderStore::new(OrderId(1001));
//! let first = store.create("Customer 1", "Address 1", Utc::now())?;
//! let second = store.create("Customer 2", "Address 2", Utc::now())?;
//!
//! assert_eq!(first, OrderId(1001));
//! assert_eq!(second, OrderId(1002));
//! assert_eq!(store.get(first).unwrap().customer_name, "Customer 1");
//! # Ok::<(), bookstore_orders::BookstoreError>(())
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use slab::Slab;
use tracing::debug;

use crate::error::{BookstoreError, Result};
use crate::types::{Order, OrderId};

/// Arena owning all orders
#[derive(Debug, Clone)]
pub struct OrderStore {
    /// Order storage
    /// Key: slab index, Value: Order
    orders: Slab<Order>,

    /// Order id to slab key mapping
    index: HashMap<OrderId, usize>,

    /// Id handed to the next created order
    /// None once the id space is used up
    next_id: Option<OrderId>,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new(OrderId(1001))
    }
}

impl OrderStore {
    /// Create an empty store whose first order gets `first_id`
    pub fn new(first_id: OrderId) -> Self {
        Self {
            orders: Slab::new(),
            index: HashMap::new(),
            next_id: Some(first_id),
        }
    }

    /// Create an empty store with pre-allocated capacity
    pub fn with_capacity(first_id: OrderId, capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            next_id: Some(first_id),
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Id the next `create` call will assign
    #[inline]
    pub fn next_id(&self) -> Option<OrderId> {
        self.next_id
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Create an order with the next sequential id
    ///
    /// # Returns
    ///
    /// * `Ok(OrderId)` - The id of the new order
    /// * `Err(OrderIdsExhausted)` - `u64::MAX` was already assigned
    pub fn create(
        &mut self,
        customer_name: impl Into<String>,
        shipping_address: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<OrderId> {
        let id = self
            .next_id
            .ok_or(BookstoreError::OrderIdsExhausted(OrderId(u64::MAX)))?;
        Ok(self.insert(Order::new(id, customer_name, shipping_address, created_at)))
    }

    /// Adopt an order built elsewhere.
    ///
    /// The id counter moves past `order.id` so later `create` calls never
    /// collide with it. An order whose id is already stored replaces the
    /// stored one in place.
    pub fn insert(&mut self, order: Order) -> OrderId {
        let id = order.id;

        if let Some(&key) = self.index.get(&id) {
            debug!(order_id = id.get(), "replacing stored order");
            self.orders[key] = order;
            return id;
        }

        let key = self.orders.insert(order);
        self.index.insert(id, key);

        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.next();
        }

        id
    }

    #[inline]
    pub fn contains(&self, id: OrderId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up an order by id
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        let key = *self.index.get(&id)?;
        self.orders.get(key)
    }

    /// Look up an order by id for modification
    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        let key = *self.index.get(&id)?;
        self.orders.get_mut(key)
    }

    /// All orders in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().map(|(_, order)| order)
    }

    /// References to all orders in insertion order
    pub fn to_vec(&self) -> Vec<&Order> {
        self.iter().collect()
    }

    /// References to all orders sorted ascending by id, ready for binary search
    pub fn sorted_by_id(&self) -> Vec<&Order> {
        let mut orders = self.to_vec();
        orders.sort_by_key(|order| order.id);
        orders
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::keys::is_sorted_by_id;

    fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::default()
    }

    #[test]
    fn test_store_new() {
        let store = OrderStore::default();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.next_id(), Some(OrderId(1001)));
    }

    #[test]
    fn test_store_create_sequential_ids() {
        let mut store = OrderStore::with_capacity(OrderId(1001), 8);

        let ids: Vec<OrderId> = (0..3)
            .map(|i| store.create(format!("Customer {}", i), "Address", epoch()).unwrap())
            .collect();

        assert_eq!(ids, vec![OrderId(1001), OrderId(1002), OrderId(1003)]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.next_id(), Some(OrderId(1004)));
    }

    #[test]
    fn test_store_get_and_get_mut() {
        let mut store = OrderStore::default();
        let id = store.create("Alice", "1 Main St", epoch()).unwrap();

        assert_eq!(store.get(id).unwrap().shipping_address, "1 Main St");

        store.get_mut(id).unwrap().complete();
        assert!(store.get(id).unwrap().is_completed());

        assert!(store.get(OrderId(9999)).is_none());
        assert!(store.get_mut(OrderId(9999)).is_none());
        assert!(!store.contains(OrderId(9999)));
    }

    #[test]
    fn test_store_insert_advances_counter() {
        let mut store = OrderStore::new(OrderId(1));
        store.insert(Order::new(OrderId(50), "x", "y", epoch()));

        assert_eq!(store.next_id(), Some(OrderId(51)));
        assert_eq!(store.create("z", "w", epoch()).unwrap(), OrderId(51));

        // Lower ids don't move the counter back
        store.insert(Order::new(OrderId(10), "x", "y", epoch()));
        assert_eq!(store.next_id(), Some(OrderId(52)));
    }

    #[test]
    fn test_store_insert_existing_replaces() {
        let mut store = OrderStore::default();
        let id = store.create("Old", "Address", epoch()).unwrap();
        store.insert(Order::new(id, "New", "Address", epoch()));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().customer_name, "New");
    }

    #[test]
    fn test_store_insert_max_id() {
        let mut store = OrderStore::new(OrderId(1));
        let id = store.insert(Order::new(OrderId(u64::MAX), "x", "y", epoch()));

        assert_eq!(id, OrderId(u64::MAX));
        assert!(store.contains(id));
        assert_eq!(store.next_id(), None);

        // Lower ids are still adopted, the counter stays exhausted
        store.insert(Order::new(OrderId(7), "x", "y", epoch()));
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_id(), None);
    }

    #[test]
    fn test_store_create_exhausts_ids() {
        let mut store = OrderStore::new(OrderId(u64::MAX));

        assert_eq!(store.create("Last", "a", epoch()).unwrap(), OrderId(u64::MAX));
        assert!(matches!(
            store.create("Late", "a", epoch()),
            Err(BookstoreError::OrderIdsExhausted(_))
        ));

        // The order holding the last id is untouched
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(OrderId(u64::MAX)).unwrap().customer_name, "Last");
    }

    #[test]
    fn test_store_iteration_order() {
        let mut store = OrderStore::new(OrderId(1));
        for id in [30, 10, 20] {
            store.insert(Order::new(OrderId(id), "c", "a", epoch()));
        }

        let inserted: Vec<u64> = store.iter().map(|o| o.id.get()).collect();
        assert_eq!(inserted, vec![30, 10, 20]);

        let sorted = store.sorted_by_id();
        assert!(is_sorted_by_id(&sorted));
        assert_eq!(sorted.len(), 3);
    }
}
