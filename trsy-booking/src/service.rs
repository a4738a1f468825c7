use trsy_core::{fan_remove, fan_upsert, KeyedCache, Listener, Service};

use crate::trade::Trade;

/// Ingests trades keyed by trade-id. `ProcessRemove` is never fired by a
/// direct delete — it's fired by [`BookingService::reverse_trade`], which
/// books the opposite-side trade under the same id.
#[derive(Debug, Default)]
pub struct BookingService {
    cache: KeyedCache<String, Trade>,
    listeners: Vec<Box<dyn Listener<Trade>>>,
}

impl BookingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book the reversing trade for `trade_id` (opposite side, same
    /// quantity and price) and fan `ProcessRemove` rather than
    /// `ProcessAdd`/`ProcessUpdate` — this is how a trade is "removed"
    /// from the aggregate position without literally erasing the cache
    /// entry.
    pub fn reverse_trade(&mut self, trade_id: &str) {
        let reversed = self.cache.get(&trade_id.to_string()).reversed();
        self.cache.upsert(trade_id.to_string(), reversed.clone());
        fan_remove(&mut self.listeners, &reversed);
    }
}

impl Service<String, Trade> for BookingService {
    fn get_data(&self, key: &String) -> &Trade {
        self.cache.get(key)
    }

    fn on_message(&mut self, trade: Trade) {
        let outcome = self.cache.upsert(trade.trade_id.clone(), trade.clone());
        fan_upsert(&mut self.listeners, &trade, outcome);
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<Trade>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Box<dyn Listener<Trade>>] {
        &self.listeners
    }
}
