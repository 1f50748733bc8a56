//! Property checks for the sorting and searching routines over seeded
//! pseudo-random data.

use bookstore_orders::algorithms::{binary_search, linear_search, merge_sort};
use bookstore_orders::bookstore::performance::{random_books, sequential_orders};
use bookstore_orders::types::keys::is_sorted_by_title;
use bookstore_orders::types::price::from_cents;
use bookstore_orders::{Book, Order, OrderId, SortAlgorithm};

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Books drawn from a tiny title pool so equal titles are common
fn books_with_duplicates(count: usize, seed: u64) -> Vec<Book> {
    const TITLES: [&str; 4] = ["Algorithms", "Compilers", "Databases", "Networks"];
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let title = TITLES[rng.gen_range(0..TITLES.len())];
            Book::new(i.to_string(), title, "author", from_cents(100), 1)
        })
        .collect()
}

/// Multiset fingerprint of a book list
fn fingerprint(books: &[Book]) -> Vec<(String, String)> {
    let mut keys: Vec<(String, String)> = books
        .iter()
        .map(|b| (b.title.clone(), b.isbn.clone()))
        .collect();
    keys.sort();
    keys
}

// ============================================================================
// SORTING
// ============================================================================

/// Output is a title-ordered permutation of the input, for every algorithm
#[test]
fn sorts_produce_ordered_permutation() {
    for seed in [1u64, 2, 3] {
        let input = random_books(400, seed);

        for algorithm in SortAlgorithm::ALL {
            let mut output = input.clone();
            algorithm.sort(&mut output);

            assert!(is_sorted_by_title(&output), "{} seed {}", algorithm, seed);
            assert_eq!(fingerprint(&output), fingerprint(&input), "{} seed {}", algorithm, seed);
        }
    }
}

/// Sorting a sorted sequence changes nothing
#[test]
fn sorts_are_idempotent() {
    let input = books_with_duplicates(200, 5);

    for algorithm in SortAlgorithm::ALL {
        let mut once = input.clone();
        algorithm.sort(&mut once);
        let mut twice = once.clone();
        algorithm.sort(&mut twice);

        assert_eq!(
            twice.iter().map(|b| &b.title).collect::<Vec<_>>(),
            once.iter().map(|b| &b.title).collect::<Vec<_>>(),
            "{}",
            algorithm
        );
    }
}

/// Merge sort matches std's stable sort exactly, duplicates included
#[test]
fn merge_sort_is_stable() {
    for seed in [10u64, 11, 12] {
        let input = books_with_duplicates(500, seed);

        let mut ours = input.clone();
        merge_sort(&mut ours);

        let mut reference = input.clone();
        reference.sort_by(|a, b| a.title.cmp(&b.title));

        assert_eq!(ours, reference, "seed {}", seed);
    }
}

#[test]
fn sorts_agree_on_titles() {
    let input = random_books(250, 77);
    let mut expected: Vec<String> = input.iter().map(|b| b.title.clone()).collect();
    expected.sort();

    for algorithm in SortAlgorithm::ALL {
        let mut output = input.clone();
        algorithm.sort(&mut output);
        let titles: Vec<String> = output.into_iter().map(|b| b.title).collect();
        assert_eq!(titles, expected, "{}", algorithm);
    }
}

// ============================================================================
// SEARCHING
// ============================================================================

/// Sorted ids with random gaps, plus a pool of ids that are absent
fn sparse_orders(count: usize, seed: u64) -> (Vec<Order>, Vec<OrderId>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);
    let mut absent = Vec::new();
    let mut next = 1001u64;

    for _ in 0..count {
        let gap = rng.gen_range(1..4u64);
        for skipped in next + 1..next + gap {
            absent.push(OrderId(skipped));
        }
        next += gap;
        orders.push(Order::new(OrderId(next), "c", "a", DateTime::<Utc>::default()));
    }

    absent.push(OrderId(0));
    absent.push(OrderId(next + 1));
    (orders, absent)
}

#[test]
fn binary_search_finds_every_present_element() {
    let (orders, _) = sparse_orders(1_000, 3);

    for order in &orders {
        let found = binary_search(&orders, order.id).expect("present id must be found");
        assert!(std::ptr::eq(found, order));
    }
}

#[test]
fn binary_search_misses_absent_ids() {
    let (orders, absent) = sparse_orders(1_000, 4);
    assert!(!absent.is_empty());

    for id in absent {
        assert!(binary_search(&orders, id).is_none(), "{}", id);
        assert!(linear_search(&orders, id).is_none(), "{}", id);
    }
}

#[test]
fn searches_agree_on_sorted_input() {
    let orders = sequential_orders(257);

    for raw in 0..300u64 {
        let id = OrderId(raw);
        assert_eq!(
            linear_search(&orders, id).map(|o| o.id),
            binary_search(&orders, id).map(|o| o.id),
            "{}",
            id
        );
    }
}
