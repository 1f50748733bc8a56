//! FIFO queue backed by a slab-allocated linked list.
//!
//! ## Design
//!
//! Nodes live in a `Slab` and are chained by slab keys. The queue keeps
//! both ends so every operation is O(1):
//!
//! ```text
//! head (front, oldest) -> node2 -> node3 -> tail (rear, newest)
//! ```
//!
//! - New items are appended at the tail
//! - Dequeue takes the head
//! - Freed slab slots are reused by later enqueues

use slab::Slab;

use crate::containers::QueueNode;

/// First-in, first-out queue.
///
/// ## Example
///
/// ```
/// use bookstore_orders::containers::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1001);
/// queue.enqueue(1002);
///
/// assert_eq!(queue.dequeue(), Some(1001));
/// assert_eq!(queue.front(), Some(&1002));
/// assert_eq!(queue.dequeue(), Some(1002));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    /// Node storage
    nodes: Slab<QueueNode<T>>,

    /// Front of the queue (slab key), next to be dequeued
    head: Option<usize>,

    /// Rear of the queue (slab key), where new items are linked
    tail: Option<usize>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }

    /// Create an empty queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Append an item at the rear. O(1) amortized.
    pub fn enqueue(&mut self, item: T) {
        let key = self.nodes.insert(QueueNode::new(item));

        match self.tail {
            Some(tail_key) => {
                // Link the old tail to the new node
                self.nodes[tail_key].next = Some(key);
            }
            None => {
                // Empty queue - this is also the head
                self.head = Some(key);
            }
        }

        self.tail = Some(key);
    }

    /// Remove and return the front item.
    ///
    /// Returns `None` and leaves the queue untouched when it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let head_key = self.head?;
        let node = self.nodes.remove(head_key);

        if node.is_tail() {
            self.tail = None;
        }
        self.head = node.next;

        Some(node.into_item())
    }

    /// Front item without removing it, or `None` when empty
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|key| &self.nodes[key].item)
    }

    /// Rear item (most recently enqueued), or `None` when empty
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|key| &self.nodes[key].item)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate from front to rear without consuming
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

/// Front-to-rear iterator over a [`Queue`]
pub struct Iter<'a, T> {
    nodes: &'a Slab<QueueNode<T>>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        Some(&node.item)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
