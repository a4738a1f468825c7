use chrono::NaiveDate;
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A US Treasury bond. Immutable once constructed — identity is the CUSIP.
///
/// Mirrors `products.hpp`'s `Bond(productId, CUSIP, ticker, coupon,
/// maturity)` constructor shape from the original trading system: the
/// product-id-type tag is carried as [`IdentifierType`] purely for display,
/// it never participates in equality or hashing.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display("{ticker} ({cusip})")]
pub struct Bond {
    pub cusip: String,
    pub identifier_type: IdentifierType,
    pub ticker: String,
    pub coupon: Decimal,
    pub maturity: NaiveDate,
}

impl Bond {
    pub fn new(
        cusip: impl Into<String>,
        ticker: impl Into<String>,
        coupon: Decimal,
        maturity: NaiveDate,
    ) -> Self {
        Self {
            cusip: cusip.into(),
            identifier_type: IdentifierType::Cusip,
            ticker: ticker.into(),
            coupon,
            maturity,
        }
    }

    /// The product identity used as a cache key across every service.
    pub fn product_id(&self) -> &str {
        &self.cusip
    }

    /// Whole years from `as_of` to maturity, used to place the bond into a
    /// [`crate::price`]-independent risk sector bucket (front-end / belly /
    /// long-end). Truncates towards zero.
    pub fn years_to_maturity(&self, as_of: NaiveDate) -> i64 {
        (self.maturity - as_of).num_days() / 365
    }
}

/// Tag for the kind of identifier carried in [`Bond::cusip`]. The original
/// system only ever used CUSIPs; the tag exists so a future identifier type
/// (ISIN, ticker-only) doesn't require a field rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IdentifierType {
    Cusip,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn bond() -> Bond {
        Bond::new(
            "912828M80",
            "T 2.25 08/15/27",
            dec!(2.25),
            NaiveDate::from_ymd_opt(2027, 8, 15).unwrap(),
        )
    }

    #[test]
    fn product_id_is_the_cusip() {
        assert_eq!(bond().product_id(), "912828M80");
    }

    #[test]
    fn years_to_maturity_truncates() {
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        assert_eq!(bond().years_to_maturity(as_of), 1);
    }
}
