//! LIFO stack.
//!
//! Backed by a `Vec`: the end of the vector is the top of the stack, so
//! push/pop/peek are O(1) (push amortized).

/// Last-in, first-out stack.
///
/// ## Example
///
/// ```
/// use bookstore_orders::containers::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1001);
/// stack.push(1002);
///
/// assert_eq!(stack.peek(), Some(&1002));
/// assert_eq!(stack.pop(), Some(1002));
/// assert_eq!(stack.pop(), Some(1001));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Put an item on top
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item, or `None` when empty
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top item without removing it, or `None` when empty
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
