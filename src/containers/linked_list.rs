//! Singly linked list of id-keyed records.
//!
//! ## Design
//!
//! Each node exclusively owns its item and the rest of the chain
//! (`Option<Box<Node<T>>>`). Only the head is stored; there is no tail
//! pointer, so appending walks the whole chain.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert_at_front` | O(1) |
//! | `insert_at_back` | O(n) |
//! | `remove_front` | O(1) |
//! | `find_by_id` | O(n) |
//! | `len` | O(1), tracked incrementally |
//!
//! ## Invariants
//!
//! - `len` always equals the number of live nodes
//! - `head` is `None` iff `len == 0`

use crate::types::{Identified, OrderId};

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    item: T,
    next: Link<T>,
}

/// Singly linked list searchable by order id.
///
/// ## Example
///
/// ```
/// use bookstore_orders::containers::SinglyLinkedList;
/// use bookstore_orders::types::OrderId;
///
/// let mut list = SinglyLinkedList::new();
/// list.insert_at_back(OrderId(1002));
/// list.insert_at_front(OrderId(1001));
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.find_by_id(OrderId(1002)), Some(&OrderId(1002)));
/// assert_eq!(list.find_by_id(OrderId(9999)), None);
/// ```
#[derive(Debug)]
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// New item becomes the head. O(1).
    pub fn insert_at_front(&mut self, item: T) {
        let node = Box::new(Node {
            item,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Append after the current last node. O(n).
    pub fn insert_at_back(&mut self, item: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { item, next: None }));
        self.len += 1;
    }

    /// Remove the head and return its item.
    ///
    /// Returns `None` and leaves the list untouched when it is empty.
    pub fn remove_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.item)
    }

    /// First item without removing it
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.item)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Identified> SinglyLinkedList<T> {
    /// First item whose order id equals `id`, walking from the head. O(n).
    pub fn find_by_id(&self, id: OrderId) -> Option<&T> {
        self.iter().find(|item| item.order_id() == id)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long lists don't recurse through Box drops
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Head-to-tail iterator over a [`SinglyLinkedList`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.item)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &SinglyLinkedList<OrderId>) -> Vec<u64> {
        list.iter().map(|id| id.get()).collect()
    }

    #[test]
    fn test_list_new() {
        let list: SinglyLinkedList<OrderId> = SinglyLinkedList::new();

        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(list.front().is_none());
    }

    #[test]
    fn test_list_insert_at_front() {
        let mut list = SinglyLinkedList::new();
        list.insert_at_front(OrderId(1));
        list.insert_at_front(OrderId(2));
        list.insert_at_front(OrderId(3));

        assert_eq!(ids(&list), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&OrderId(3)));
    }

    #[test]
    fn test_list_insert_at_back() {
        let mut list = SinglyLinkedList::new();
        list.insert_at_back(OrderId(1));
        list.insert_at_back(OrderId(2));
        list.insert_at_front(OrderId(0));
        list.insert_at_back(OrderId(3));

        assert_eq!(ids(&list), vec![0, 1, 2, 3]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_list_remove_front() {
        let mut list = SinglyLinkedList::new();
        list.insert_at_back(OrderId(1));
        list.insert_at_back(OrderId(2));

        assert_eq!(list.remove_front(), Some(OrderId(1)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.remove_front(), Some(OrderId(2)));
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_list_remove_front_empty_is_noop() {
        let mut list: SinglyLinkedList<OrderId> = SinglyLinkedList::new();

        assert_eq!(list.remove_front(), None);
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_list_find_by_id() {
        let mut list = SinglyLinkedList::new();
        for id in [1001, 1002, 1003] {
            list.insert_at_back(OrderId(id));
        }

        assert_eq!(list.find_by_id(OrderId(1002)), Some(&OrderId(1002)));
        assert_eq!(list.find_by_id(OrderId(1004)), None);
    }

    #[test]
    fn test_list_find_by_id_returns_first_match() {
        // Two records sharing an id: the one nearer the head wins
        let mut list = SinglyLinkedList::new();
        list.insert_at_back((OrderId(5), "first"));
        list.insert_at_back((OrderId(5), "second"));

        assert_eq!(list.find_by_id(OrderId(5)).map(|(_, tag)| *tag), Some("first"));
    }

    #[test]
    fn test_list_long_drop() {
        let mut list = SinglyLinkedList::new();
        for i in 0..200_000u64 {
            list.insert_at_front(OrderId(i));
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    impl Identified for (OrderId, &str) {
        fn order_id(&self) -> OrderId {
            self.0
        }
    }
}
