use serde::{Deserialize, Serialize};
use trsy_integration::FnvIndexMap;

/// Per-book signed quantities for one product. Aggregate is always summed
/// on demand from `books` — never cached — so a book-level mutation can
/// never desynchronize it from the per-book map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Position {
    pub product_id: String,
    pub books: FnvIndexMap<String, i64>,
}

impl Position {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            books: FnvIndexMap::default(),
        }
    }

    /// Add a signed quantity to `book_id`'s running total.
    pub fn add(&mut self, book_id: impl Into<String>, signed_quantity: i64) {
        *self.books.entry(book_id.into()).or_insert(0) += signed_quantity;
    }

    /// Sum across every book.
    pub fn aggregate(&self) -> i64 {
        self.books.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_sums_every_book() {
        let mut position = Position::new("912828M80");
        position.add("TRSY1", 1_000_000);
        position.add("TRSY2", -400_000);
        assert_eq!(position.aggregate(), 600_000);
    }

    #[test]
    fn adding_to_the_same_book_twice_accumulates() {
        let mut position = Position::new("912828M80");
        position.add("TRSY1", 1_000_000);
        position.add("TRSY1", -1_000_000);
        assert_eq!(position.aggregate(), 0);
        assert_eq!(*position.books.get("TRSY1").unwrap(), 0);
    }
}
