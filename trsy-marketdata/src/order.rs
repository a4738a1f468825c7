use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trsy_product::PricingSide;

/// A market-data depth level.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct Order {
    pub price: Decimal,
    pub quantity: i64,
    pub side: PricingSide,
}

/// One product's aggregated depth: an ordered bid stack and offer stack.
/// Invariant: every entry in `bids` has `side == Bid`, every entry in
/// `offers` has `side == Offer`.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct OrderBook {
    pub product_id: String,
    pub bids: Vec<Order>,
    pub offers: Vec<Order>,
}

impl OrderBook {
    /// The max-priced bid and min-priced offer. Panics on an empty stack —
    /// a book with no levels on one side has nothing meaningful to quote.
    pub fn best_bid_offer(&self) -> (&Order, &Order) {
        let best_bid = self
            .bids
            .iter()
            .max_by_key(|order| order.price)
            .expect("order book has no bids");
        let best_offer = self
            .offers
            .iter()
            .min_by_key(|order| order.price)
            .expect("order book has no offers");
        (best_bid, best_offer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn best_bid_offer_picks_max_bid_and_min_offer() {
        let book = OrderBook::new(
            "X".to_string(),
            vec![
                Order::new(dec!(99.5), 100, PricingSide::Bid),
                Order::new(dec!(99.4), 50, PricingSide::Bid),
            ],
            vec![
                Order::new(dec!(99.6), 200, PricingSide::Offer),
                Order::new(dec!(99.7), 10, PricingSide::Offer),
            ],
        );
        let (bid, offer) = book.best_bid_offer();
        assert_eq!(bid.price, dec!(99.5));
        assert_eq!(offer.price, dec!(99.6));
    }
}
