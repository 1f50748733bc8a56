//! Order lookups by id.
//!
//! | Algorithm | Time | Input requirement |
//! |-----------|------|-------------------|
//! | [`linear_search`] | O(n) | none |
//! | [`binary_search`] | O(log n) | sorted ascending by order id |

use std::cmp::Ordering;

use crate::types::{Identified, OrderId};

/// Scan from the start, returning the first record with order id `id`.
///
/// Works on any ordering.
pub fn linear_search<T: Identified>(items: &[T], id: OrderId) -> Option<&T> {
    items.iter().find(|item| item.order_id() == id)
}

/// Halve the search interval until `id` is found or the interval is empty.
///
/// # Precondition
///
/// `items` must be sorted ascending by order id. This is NOT checked. On
/// unsorted input the result is unspecified: a record that is present may be
/// reported as missing. Use [`crate::types::keys::is_sorted_by_id`] in tests
/// or debug code if in doubt.
///
/// # Example
///
/// ```
/// use bookstore_orders::algorithms::binary_search;
/// use bookstore_orders::types::OrderId;
///
/// let ids = [OrderId(1001), OrderId(1002), OrderId(1003)];
/// assert_eq!(binary_search(&ids, OrderId(1002)), Some(&OrderId(1002)));
/// assert_eq!(binary_search(&ids, OrderId(9999)), None);
/// ```
pub fn binary_search<T: Identified>(items: &[T], id: OrderId) -> Option<&T> {
    // Half-open interval [low, high)
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;

        match items[mid].order_id().cmp(&id) {
            Ordering::Equal => return Some(&items[mid]),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

// ============================================================================
// Unit Tests
// ============================================================================
