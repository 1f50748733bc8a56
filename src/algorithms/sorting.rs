//! Comparison sorts ordered by title.
//!
//! Every routine sorts the slice in place so that for each adjacent pair
//! `a.title() <= b.title()`. Output is always a permutation of the input.
//!
//! | Algorithm | Time | Extra space | Stable |
//! |-----------|------|-------------|--------|
//! | [`bubble_sort`] | O(n²) always | O(1) | - |
//! | [`selection_sort`] | O(n²) | O(1) | no |
//! | [`insertion_sort`] | O(n²) worst, ~O(n) nearly sorted | O(1) | - |
//! | [`merge_sort`] | O(n log n) | O(n) | yes |
//! | [`quick_sort`] | O(n log n) avg, O(n²) worst | O(log n) avg stack | no |
//!
//! Only merge sort promises stability.

use std::cmp::Ordering;

use crate::types::keys::cmp_title;
use crate::types::Titled;

// ============================================================================
// O(n²) sorts
// ============================================================================

/// Bubble sort.
///
/// Always makes the full `n - 1` passes, swapping adjacent pairs whose
/// titles are out of order. There is no early exit on an already sorted
/// input.
pub fn bubble_sort<T: Titled>(items: &mut [T]) {
    let n = items.len();
    if n < 2 {
        return;
    }

    for pass in 0..n - 1 {
        // The last `pass` slots already hold their final elements
        for j in 0..n - pass - 1 {
            if cmp_title(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
            }
        }
    }
}

/// Selection sort.
///
/// For each position, finds the minimum title in the unsorted remainder and
/// swaps it into place.
pub fn selection_sort<T: Titled>(items: &mut [T]) {
    let n = items.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            if cmp_title(&items[j], &items[min_idx]) == Ordering::Less {
                min_idx = j;
            }
        }
        items.swap(i, min_idx);
    }
}

/// Insertion sort.
///
/// Grows a sorted prefix; each new element moves left past predecessors
/// with a strictly greater title.
pub fn insertion_sort<T: Titled>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp_title(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

// ============================================================================
// O(n log n) sorts
// ============================================================================

/// Merge sort (stable).
///
/// Splits at the midpoint, sorts both halves recursively, then merges them
/// through a temporary buffer. On equal titles the left-half element wins,
/// so records with equal titles keep their original relative order.
pub fn merge_sort<T: Titled + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);
    merge(items, mid);
}

/// Merge the sorted runs `items[..mid]` and `items[mid..]`
fn merge<T: Titled + Clone>(items: &mut [T], mid: usize) {
    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // `<=` keeps the merge stable
        let take_left = j >= right.len()
            || (i < left.len() && cmp_title(&left[i], &right[j]) != Ordering::Greater);

        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Quick sort with Lomuto partitioning.
///
/// The last element is the pivot. Already sorted and reverse sorted inputs
/// hit the O(n²) worst case with this pivot choice.
pub fn quick_sort<T: Titled>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    let pivot = partition(items);
    let (left, right) = items.split_at_mut(pivot);
    quick_sort(left);
    // right[0] is the pivot, already in its final slot
    quick_sort(&mut right[1..]);
}

/// Lomuto partition around the last element; returns the pivot's final index
fn partition<T: Titled>(items: &mut [T]) -> usize {
    let high = items.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if cmp_title(&items[j], &items[high]) == Ordering::Less {
            items.swap(store, j);
            store += 1;
        }
    }

    items.swap(store, high);
    store
}

// ============================================================================
// Unit Tests
// ============================================================================
