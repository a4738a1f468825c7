use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trsy_product::TradeSide;

/// A booked trade. Identity is `trade_id`; `product_id` is the bond's CUSIP.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: String,
    pub product_id: String,
    pub book_id: String,
    pub quantity: i64,
    pub side: TradeSide,
    pub price: Decimal,
}

impl Trade {
    /// Build the reversing trade booked by [`crate::service::BookingService::reverse_trade`]:
    /// same id, same quantity and price, opposite side.
    pub fn reversed(&self) -> Self {
        Self {
            side: self.side.flipped(),
            ..self.clone()
        }
    }

    /// Signed quantity this trade contributes to a position: `+quantity` for
    /// `BUY`, `-quantity` for `SELL`.
    pub fn signed_quantity(&self) -> i64 {
        self.side.signum() * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade() -> Trade {
        Trade::new(
            "T1".to_string(),
            "912828M80".to_string(),
            "TRSY1".to_string(),
            1_000_000,
            TradeSide::Buy,
            dec!(99.5),
        )
    }

    #[test]
    fn reversed_trade_keeps_id_and_quantity_but_flips_side() {
        let reversed = trade().reversed();
        assert_eq!(reversed.trade_id, "T1");
        assert_eq!(reversed.quantity, 1_000_000);
        assert_eq!(reversed.side, TradeSide::Sell);
    }

    #[test]
    fn signed_quantity_reflects_side() {
        assert_eq!(trade().signed_quantity(), 1_000_000);
        assert_eq!(trade().reversed().signed_quantity(), -1_000_000);
    }
}
