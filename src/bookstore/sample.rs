//! Sample catalog and orders loaded at startup.

use crate::types::price::from_cents;
use crate::types::Book;

/// Number of sample orders a new [`crate::Bookstore`] starts with
pub const SAMPLE_ORDER_COUNT: usize = 3;

/// (isbn, title, author, price in cents, quantity)
const CATALOG: [(&str, &str, &str, u64, u32); 8] = [
    ("001", "Java Programming", "John Smith", 4599, 10),
    ("002", "Data Structures", "Alice Johnson", 5599, 8),
    ("003", "Algorithms Design", "Bob Williams", 6599, 5),
    ("004", "Database Systems", "Carol Davis", 5099, 12),
    ("005", "Web Development", "David Brown", 4099, 15),
    ("006", "Python Basics", "Emma Wilson", 3599, 20),
    ("007", "Machine Learning", "Frank Miller", 7599, 7),
    ("008", "Cloud Computing", "Grace Taylor", 6099, 9),
];

/// The eight-book sample catalog
pub fn sample_catalog() -> Vec<Book> {
    CATALOG
        .iter()
        .map(|&(isbn, title, author, cents, quantity)| {
            Book::new(isbn, title, author, from_cents(cents), quantity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_sample_catalog() {
        let catalog = sample_catalog();

        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].title, "Java Programming");
        assert_eq!(catalog[0].price, Decimal::new(4599, 2));
        assert_eq!(catalog[7].isbn, "008");
        assert_eq!(catalog[7].author, "Grace Taylor");
        assert_eq!(catalog[5].quantity, 20);
    }
}
