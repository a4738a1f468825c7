use rust_decimal::Decimal;
use std::collections::BTreeMap;

use trsy_core::{fan_update, Listener, Service};
use trsy_integration::FnvIndexMap;
use trsy_product::PricingSide;

use crate::order::{Order, OrderBook};

/// Holds, per product, one order book per venue update received so far —
/// a multimap, not a single keyed cache — until [`MarketDataService::aggregate_depth`]
/// merges them into one.
#[derive(Debug, Default)]
pub struct MarketDataService {
    books_by_product: FnvIndexMap<String, Vec<OrderBook>>,
    listeners: Vec<Box<dyn Listener<OrderBook>>>,
}

impl MarketDataService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every book held for `product_id`: group bids by price summing
    /// quantity, group offers the same way, replace the held books with
    /// the single merged one, and return it.
    pub fn aggregate_depth(&mut self, product_id: &str) -> &OrderBook {
        let held = self
            .books_by_product
            .get(product_id)
            .unwrap_or_else(|| panic!("MarketDataService: no order book received for {product_id:?}"));

        let mut bid_totals: BTreeMap<Decimal, i64> = BTreeMap::new();
        let mut offer_totals: BTreeMap<Decimal, i64> = BTreeMap::new();
        for book in held {
            for order in &book.bids {
                *bid_totals.entry(order.price).or_insert(0) += order.quantity;
            }
            for order in &book.offers {
                *offer_totals.entry(order.price).or_insert(0) += order.quantity;
            }
        }

        let bids = bid_totals
            .into_iter()
            .map(|(price, quantity)| Order::new(price, quantity, PricingSide::Bid))
            .collect();
        let offers = offer_totals
            .into_iter()
            .map(|(price, quantity)| Order::new(price, quantity, PricingSide::Offer))
            .collect();

        let merged = OrderBook::new(product_id.to_string(), bids, offers);
        self.books_by_product.insert(product_id.to_string(), vec![merged]);
        &self.books_by_product[product_id][0]
    }

    pub fn best_bid_offer(&mut self, product_id: &str) -> (Order, Order) {
        let merged = self.aggregate_depth(product_id);
        let (bid, offer) = merged.best_bid_offer();
        (bid.clone(), offer.clone())
    }
}

impl Service<String, OrderBook> for MarketDataService {
    fn get_data(&self, key: &String) -> &OrderBook {
        self.books_by_product
            .get(key)
            .and_then(|books| books.first())
            .unwrap_or_else(|| panic!("MarketDataService: no order book received for {key:?}"))
    }

    fn on_message(&mut self, book: OrderBook) {
        let product_id = book.product_id.clone();
        self.books_by_product.entry(product_id.clone()).or_default().push(book);
        let merged = self.aggregate_depth(&product_id).clone();
        fan_update(&mut self.listeners, &merged);
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<OrderBook>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Box<dyn Listener<OrderBook>>] {
        &self.listeners
    }
}
