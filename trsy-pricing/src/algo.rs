use rand::Rng;
use trsy_core::{fan_add, KeyedCache, Listener, Service};
use trsy_product::{Price, PricingSide};

use crate::stream::{PriceStream, PriceStreamOrder};

/// Visible quantity is drawn from `{10000, 20000, ..., 100000}`.
fn random_visible_quantity() -> i64 {
    rand::rng().random_range(1..=10) * 10_000
}

/// Hidden quantity is drawn from `{15000, 30000, ..., 300000}`.
fn random_hidden_quantity() -> i64 {
    rand::rng().random_range(1..=20) * 15_000
}

/// Builds a two-sided [`PriceStream`] from every new internal [`Price`].
/// Always fans `ProcessAdd` — nothing here is ever treated as an update.
#[derive(Debug, Default)]
pub struct AlgoStreamingService {
    cache: KeyedCache<String, PriceStream>,
    listeners: Vec<Box<dyn Listener<PriceStream>>>,
}

impl AlgoStreamingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, price: &Price) {
        let bid_order = PriceStreamOrder::new(
            price.bid(),
            random_visible_quantity(),
            random_hidden_quantity(),
            PricingSide::Bid,
        );
        let offer_order = PriceStreamOrder::new(
            price.offer(),
            random_visible_quantity(),
            random_hidden_quantity(),
            PricingSide::Offer,
        );
        let stream = PriceStream::new(price.product_id.clone(), bid_order, offer_order);

        self.cache.upsert(price.product_id.clone(), stream.clone());
        fan_add(&mut self.listeners, &stream);
    }
}

impl Service<String, PriceStream> for AlgoStreamingService {
    fn get_data(&self, key: &String) -> &PriceStream {
        self.cache.get(key)
    }

    fn on_message(&mut self, _value: PriceStream) {
        // Algo streams are only ever produced by `execute`.
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<PriceStream>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Box<dyn Listener<PriceStream>>] {
        &self.listeners
    }
}
