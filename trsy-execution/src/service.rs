use trsy_core::{fan_add, Connector, KeyedCache, Listener, Service, TrsyError};

use crate::execution_order::ExecutionOrder;
use crate::order_type::Venue;

/// Routes an [`ExecutionOrder`] to a venue and records it in the keyed
/// cache. Every call fans `ProcessAdd` — nothing in this system ever
/// updates a previously-routed order in place.
#[derive(Debug)]
pub struct ExecutionService<C> {
    cache: KeyedCache<String, ExecutionOrder>,
    listeners: Vec<Box<dyn Listener<ExecutionOrder>>>,
    connector: C,
}

impl<C: Connector<(Venue, ExecutionOrder)>> ExecutionService<C> {
    pub fn new(connector: C) -> Self {
        Self {
            cache: KeyedCache::new(),
            listeners: Vec::new(),
            connector,
        }
    }

    /// Route `order` to `venue`: record it, fan it out, then publish to the
    /// output sink. A write failure is returned to the caller, which is
    /// expected to abort the run — this system has no retry path for a
    /// failed execution sink.
    pub fn execute_order(&mut self, order: ExecutionOrder, venue: Venue) -> Result<(), TrsyError> {
        self.cache.upsert(order.product_id.clone(), order.clone());
        fan_add(&mut self.listeners, &order);
        self.connector.publish(&(venue, order))?;
        Ok(())
    }
}

impl<C: Connector<(Venue, ExecutionOrder)>> Service<String, ExecutionOrder> for ExecutionService<C> {
    fn get_data(&self, key: &String) -> &ExecutionOrder {
        self.cache.get(key)
    }

    fn on_message(&mut self, _value: ExecutionOrder) {
        // Execution orders only ever arrive via `execute_order`.
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
    use crate::order_type::OrderType;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::rc::Rc;
    use trsy_product::PricingSide;

    #[derive(Debug, Default)]
    struct RecordingConnector(Rc<RefCell<Vec<(Venue, ExecutionOrder)>>>);

    impl Connector<(Venue, ExecutionOrder)> for RecordingConnector {
        fn publish(&mut self, value: &(Venue, ExecutionOrder)) -> std::io::Result<()> {
            self.0.borrow_mut().push(value.clone());
            Ok(())
        }
    }

    fn order() -> ExecutionOrder {
        ExecutionOrder::new(
            "912828M80".to_string(),
            PricingSide::Bid,
            "1".to_string(),
            OrderType::Market,
            dec!(99.5),
            300,
            700,
            "1".to_string(),
            false,
        )
    }

    #[test]
    fn execute_order_caches_fans_and_publishes() {
        let published = Rc::new(RefCell::new(Vec::new()));
        let mut service = ExecutionService::new(RecordingConnector(published.clone()));

        service.execute_order(order(), Venue::Cme).unwrap();

        assert_eq!(service.get_data(&"912828M80".to_string()).order_id, "1");
        assert_eq!(published.borrow().len(), 1);
        assert_eq!(published.borrow()[0].0, Venue::Cme);
    }
}
