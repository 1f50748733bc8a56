//! Book records.
//!
//! A `Book` has no identity beyond its ISBN, and even that is not enforced:
//! orders hold independent copies of catalog entries, so two books with the
//! same ISBN are perfectly normal.

use rust_decimal::Decimal;

/// A book in the catalog, or a line item inside an order.
///
/// ## Example
///
/// ```
/// use bookstore_orders::types::Book;
/// use rust_decimal::Decimal;
///
/// let book = Book::new("001", "Java Programming", "John Smith", Decimal::new(4599, 2), 10);
/// assert_eq!(book.title, "Java Programming");
/// assert_eq!(book.price.to_string(), "45.99");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Book {
    /// ISBN (catalog identifier)
    pub isbn: String,

    /// Title, the sort key for every sorting routine
    pub title: String,

    pub author: String,

    /// Unit price, non-negative
    pub price: Decimal,

    /// Copies in stock (catalog) or copies ordered (line item)
    pub quantity: u32,
}

impl Book {
    /// Create a new book record.
    ///
    /// Negative prices are clamped to zero.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price: price.max(Decimal::ZERO),
            quantity,
        }
    }

    /// Copy of this book with a different quantity.
    ///
    /// Used when a catalog entry becomes an order line item.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
