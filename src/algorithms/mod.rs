//! Sorting and searching routines.
//!
//! ## Sorting
//!
//! Five independent in-place sorts over any slice of [`Titled`] records
//! (books, references to books, plain title strings). [`SortAlgorithm`]
//! names them so callers can pick one at runtime.
//!
//! ## Searching
//!
//! Linear and binary search over any slice of [`Identified`] records.
//! Binary search trusts its caller to pass an id-sorted slice.
//!
//! ## Example
//!
//! ```
//! use bookstore_orders::algorithms::SortAlgorithm;
//!
//! let mut titles = vec!["Web Development", "Cloud Computing", "Algorithms Design"];
//! SortAlgorithm::Quick.sort(&mut titles);
//!
//! assert_eq!(titles, ["Algorithms Design", "Cloud Computing", "Web Development"]);
//! ```
//!
//! [`Identified`]: crate::types::Identified

pub mod sorting;
pub mod searching;

pub use searching::{binary_search, linear_search};
pub use sorting::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};

use std::fmt;

use crate::types::Titled;

// ============================================================================
// SortAlgorithm enum
// ============================================================================

/// One of the five sort routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    /// All algorithms, in menu order
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    /// Sort `items` by title with this algorithm
    pub fn sort<T: Titled + Clone>(self, items: &mut [T]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(items),
            SortAlgorithm::Selection => selection_sort(items),
            SortAlgorithm::Insertion => insertion_sort(items),
            SortAlgorithm::Merge => merge_sort(items),
            SortAlgorithm::Quick => quick_sort(items),
        }
    }

    /// Map a 1-based menu choice to an algorithm
    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
        }
    }

    /// Time complexity (average case for quick sort)
    pub fn time_complexity(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble | SortAlgorithm::Selection | SortAlgorithm::Insertion => "O(n²)",
            SortAlgorithm::Merge => "O(n log n)",
            SortAlgorithm::Quick => "O(n log n)*",
        }
    }

    /// Auxiliary space
    pub fn space_complexity(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble | SortAlgorithm::Selection | SortAlgorithm::Insertion => "O(1)",
            SortAlgorithm::Merge => "O(n)",
            SortAlgorithm::Quick => "O(log n)",
        }
    }

    /// Whether equal titles are guaranteed to keep their relative order
    pub fn is_stable(self) -> bool {
        matches!(self, SortAlgorithm::Merge)
    }

    /// Short description of how the algorithm works
    pub fn summary(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Compares adjacent elements and swaps them",
            SortAlgorithm::Selection => "Finds the minimum element and places it at the front",
            SortAlgorithm::Insertion => "Builds the sorted prefix one element at a time",
            SortAlgorithm::Merge => "Divide and conquer, merging sorted halves",
            SortAlgorithm::Quick => "Partitions around a pivot, then recurses",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SearchAlgorithm enum
// ============================================================================

/// One of the two search routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
}

impl SearchAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::Binary => "Binary Search",
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "O(n)",
            SearchAlgorithm::Binary => "O(log n)",
        }
    }

    /// Whether the input must be sorted by order id
    pub fn requires_sorted_input(self) -> bool {
        matches!(self, SearchAlgorithm::Binary)
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
