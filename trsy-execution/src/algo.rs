use trsy_core::{fan_add, KeyedCache, Listener, Service};
use trsy_integration::FnvIndexMap;
use trsy_marketdata::OrderBook;
use trsy_product::PricingSide;

use crate::execution_order::ExecutionOrder;
use crate::order_type::OrderType;

/// Generates a [`ExecutionOrder`] against the current best level of an
/// aggregated book, alternating sides per product starting with `BID`.
#[derive(Debug, Default)]
pub struct AlgoExecutionService {
    cache: KeyedCache<String, ExecutionOrder>,
    listeners: Vec<Box<dyn Listener<ExecutionOrder>>>,
    crossing_offer: FnvIndexMap<String, bool>,
    next_order_id: u64,
}

impl AlgoExecutionService {
    pub fn new() -> Self {
        Self {
            next_order_id: 1,
            ..Default::default()
        }
    }

    /// A fresh aggregated book arrived: flip this product's side bit and
    /// cross the best level on the side the bit now points to.
    pub fn execute(&mut self, book: &OrderBook) {
        let bit = self.crossing_offer.entry(book.product_id.clone()).or_insert(false);
        *bit = !*bit;
        let crossing_offer = *bit;

        let order_id = self.next_order_id.to_string();
        self.next_order_id += 1;

        let order = if crossing_offer {
            let best_offer = book
                .offers
                .iter()
                .min_by_key(|order| order.price)
                .expect("algo-execution: order book has no offers to cross");
            let visible = (best_offer.quantity * 3) / 10;
            ExecutionOrder::new(
                book.product_id.clone(),
                PricingSide::Bid,
                order_id.clone(),
                OrderType::Market,
                best_offer.price,
                visible,
                best_offer.quantity - visible,
                order_id,
                false,
            )
        } else {
            let best_bid = book
                .bids
                .iter()
                .max_by_key(|order| order.price)
                .expect("algo-execution: order book has no bids to cross");
            let visible = (best_bid.quantity * 3) / 10;
            ExecutionOrder::new(
                book.product_id.clone(),
                PricingSide::Offer,
                order_id.clone(),
                OrderType::Market,
                best_bid.price,
                visible,
                best_bid.quantity - visible,
                order_id,
                false,
            )
        };

        self.cache.upsert(book.product_id.clone(), order.clone());
        fan_add(&mut self.listeners, &order);
    }
}

impl Service<String, ExecutionOrder> for AlgoExecutionService {
    fn get_data(&self, key: &String) -> &ExecutionOrder {
        self.cache.get(key)
    }

    fn on_message(&mut self, _value: ExecutionOrder) {
        // Algo orders are only ever produced by `execute`.
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<ExecutionOrder>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Box<dyn Listener<ExecutionOrder>>] {
        &self.listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use trsy_marketdata::Order;

    fn book() -> OrderBook {
        OrderBook::new(
            "X".to_string(),
            vec![
                Order::new(dec!(99.5), 800, PricingSide::Bid),
                Order::new(dec!(99.4), 400, PricingSide::Bid),
            ],
            vec![
                Order::new(dec!(99.6), 1000, PricingSide::Offer),
                Order::new(dec!(99.7), 500, PricingSide::Offer),
            ],
        )
    }

    #[test]
    fn successive_executions_alternate_sides_starting_with_bid() {
        let mut service = AlgoExecutionService::new();
        service.execute(&book());
        let first = service.get_data(&"X".to_string()).clone();
        assert_eq!(first.side, PricingSide::Bid);
        assert_eq!(first.price, dec!(99.6));
        assert_eq!(first.visible_quantity, 300);
        assert_eq!(first.hidden_quantity, 700);

        service.execute(&book());
        let second = service.get_data(&"X".to_string()).clone();
        assert_eq!(second.side, PricingSide::Offer);
        assert_eq!(second.price, dec!(99.5));
        assert_eq!(second.visible_quantity, 240);
        assert_eq!(second.hidden_quantity, 560);
    }
}
