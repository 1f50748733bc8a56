//! Side-by-side timing of the sort and search routines.
//!
//! Test data comes from a seeded ChaCha RNG: the same seed always produces
//! the same books, so two runs only differ in measured time.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::algorithms::{binary_search, linear_search, SearchAlgorithm, SortAlgorithm};
use crate::types::keys::is_sorted_by_title;
use crate::types::price::from_cents;
use crate::types::{Book, Order, OrderId};

/// Timing of one sort run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortTiming {
    pub algorithm: SortAlgorithm,
    pub elapsed: Duration,
    /// Output passed the title-order check
    pub sorted: bool,
}

/// Timing of one search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTiming {
    pub algorithm: SearchAlgorithm,
    pub elapsed: Duration,
    pub found: bool,
}

/// Result of [`compare`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceReport {
    /// Number of elements tested
    pub size: usize,
    /// One entry per sort algorithm, in menu order
    pub sorts: Vec<SortTiming>,
    /// Linear then binary
    pub searches: Vec<SearchTiming>,
}

impl PerformanceReport {
    /// Sort with the smallest elapsed time (first one wins ties)
    pub fn fastest_sort(&self) -> Option<&SortTiming> {
        self.sorts.iter().reduce(|best, t| if t.elapsed < best.elapsed { t } else { best })
    }
}

/// Generate `size` books with random titles `Book0`..`Book9999`
pub fn random_books(size: usize, seed: u64) -> Vec<Book> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..size)
        .map(|i| {
            let title = format!("Book{}", rng.gen_range(0..10_000u32));
            let price = from_cents(rng.gen_range(0..10_000u64));
            let quantity = rng.gen_range(0..50u32);
            Book::new(i.to_string(), title, format!("Author{}", i), price, quantity)
        })
        .collect()
}

/// Orders with ids `0..size`, already in ascending id order
pub fn sequential_orders(size: usize) -> Vec<Order> {
    let created_at = DateTime::<Utc>::default();
    (0..size as u64)
        .map(|i| Order::new(OrderId(i), format!("Customer{}", i), format!("Address{}", i), created_at))
        .collect()
}

/// Run every sort on its own copy of the same random data, then search for
/// the middle id with both searches.
pub fn compare(size: usize, seed: u64) -> PerformanceReport {
    let books = random_books(size, seed);

    let sorts = SortAlgorithm::ALL
        .iter()
        .map(|&algorithm| {
            let mut copy = books.clone();
            let start = Instant::now();
            algorithm.sort(&mut copy);
            let elapsed = start.elapsed();

            debug!(algorithm = algorithm.name(), size, ?elapsed, "sort finished");

            SortTiming {
                algorithm,
                elapsed,
                sorted: is_sorted_by_title(&copy),
            }
        })
        .collect();

    let orders = sequential_orders(size);
    let target = OrderId((size / 2) as u64);

    let start = Instant::now();
    let linear_found = linear_search(&orders, target).is_some();
    let linear_elapsed = start.elapsed();

    let start = Instant::now();
    let binary_found = binary_search(&orders, target).is_some();
    let binary_elapsed = start.elapsed();

    PerformanceReport {
        size,
        sorts,
        searches: vec![
            SearchTiming {
                algorithm: SearchAlgorithm::Linear,
                elapsed: linear_elapsed,
                found: linear_found,
            },
            SearchTiming {
                algorithm: SearchAlgorithm::Binary,
                elapsed: binary_elapsed,
                found: binary_found,
            },
        ],
    }
}
