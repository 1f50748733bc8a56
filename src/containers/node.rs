//! Queue node for slab-based storage.
//!
//! ## Design
//!
//! `QueueNode` wraps an item with a forward link to the next node in the
//! queue. Links are slab keys, not references, so the queue owns all of its
//! nodes in one `Slab` and never needs `unsafe` or `Rc<RefCell<_>>`.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup

/// Node stored in the queue's slab.
///
/// ## Memory Layout
///
/// ```text
/// QueueNode<T> {
///     item: T
///     next: Option<usize>   (slab key of the node behind this one)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueueNode<T> {
    /// The queued item
    pub item: T,

    /// Next node towards the rear (slab key)
    /// None if this is the tail
    pub next: Option<usize>,
}

impl<T> QueueNode<T> {
    /// Create a new unlinked node
    #[inline]
    pub fn new(item: T) -> Self {
        Self { item, next: None }
    }

    /// Check if this node is the last one in its queue
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// Consume the node, returning the item
    #[inline]
    pub fn into_item(self) -> T {
        self.item
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
