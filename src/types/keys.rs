//! Comparison keys shared by the containers and algorithms.
//!
//! ## Design
//!
//! The algorithms are generic over what they sort or search. They only
//! need one key per record:
//!
//! | Trait | Key | Used by |
//! |-------|-----|---------|
//! | [`Titled`] | `&str` title, lexicographic | every sort routine |
//! | [`Identified`] | [`OrderId`], numeric | searches, `SinglyLinkedList::find_by_id` |
//!
//! Both traits are implemented for references, so a `Vec<&Order>` built
//! from the order store can be searched without cloning orders.
//!
//! Title order is Rust's `str` ordering (byte-wise UTF-8, which matches
//! Unicode code point order).

use std::cmp::Ordering;

use crate::types::{Book, Order, OrderId};

/// Records ordered by title
pub trait Titled {
    fn title(&self) -> &str;
}

/// Records keyed by order id
pub trait Identified {
    fn order_id(&self) -> OrderId;
}

// ============================================================================
// Comparators
// ============================================================================

/// Compare two records by title
#[inline]
pub fn cmp_title<T: Titled + ?Sized>(a: &T, b: &T) -> Ordering {
    a.title().cmp(b.title())
}

/// Check whether every adjacent pair satisfies `a.title <= b.title`
pub fn is_sorted_by_title<T: Titled>(items: &[T]) -> bool {
    items.windows(2).all(|pair| cmp_title(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Check whether order ids are non-decreasing (binary search precondition)
pub fn is_sorted_by_id<T: Identified>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0].order_id() <= pair[1].order_id())
}

// ============================================================================
// Implementations
// ============================================================================

impl Titled for Book {
    #[inline]
    fn title(&self) -> &str {
        &self.title
    }
}

impl Titled for str {
    #[inline]
    fn title(&self) -> &str {
        self
    }
}

impl Titled for String {
    #[inline]
    fn title(&self) -> &str {
        self
    }
}

impl<T: Titled + ?Sized> Titled for &T {
    #[inline]
    fn title(&self) -> &str {
        (**self).title()
    }
}

impl Identified for Order {
    #[inline]
    fn order_id(&self) -> OrderId {
        self.id
    }
}

impl Identified for OrderId {
    #[inline]
    fn order_id(&self) -> OrderId {
        *self
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    #[inline]
    fn order_id(&self) -> OrderId {
        (**self).order_id()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn book(title: &str) -> Book {
        Book::new("isbn", title, "author", Decimal::ONE, 1)
    }

    #[test]
    fn test_cmp_title() {
        assert_eq!(cmp_title(&book("Algorithms"), &book("Databases")), Ordering::Less);
        assert_eq!(cmp_title(&book("Web"), &book("Web")), Ordering::Equal);
        // Uppercase sorts before lowercase, as in byte order
        assert_eq!(cmp_title(&book("Zebra"), &book("apple")), Ordering::Less);
    }

    #[test]
    fn test_is_sorted_by_title() {
        let sorted = vec![book("A"), book("B"), book("B"), book("C")];
        let unsorted = vec![book("B"), book("A")];

        assert!(is_sorted_by_title(&sorted));
        assert!(!is_sorted_by_title(&unsorted));
        assert!(is_sorted_by_title::<Book>(&[]));
    }

    #[test]
    fn test_is_sorted_by_id() {
        assert!(is_sorted_by_id(&[OrderId(1), OrderId(2), OrderId(2)]));
        assert!(!is_sorted_by_id(&[OrderId(3), OrderId(1)]));
    }

    #[test]
    fn test_reference_impls() {
        let b = book("Cloud Computing");
        let r = &b;
        assert_eq!(Titled::title(&r), "Cloud Computing");

        let id = OrderId(1001);
        let rid = &id;
        assert_eq!(rid.order_id(), OrderId(1001));
    }
}
