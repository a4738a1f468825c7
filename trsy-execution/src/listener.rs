use rand::seq::SliceRandom;
use trsy_core::{Connector, Listener};
use trsy_marketdata::OrderBook;

use crate::algo::AlgoExecutionService;
use crate::execution_order::ExecutionOrder;
use crate::order_type::Venue;
use crate::service::ExecutionService;

/// Bridges aggregated market data into algo-execution. Only a depth
/// *update* is actionable here — a brand-new or removed book carries no
/// tradeable signal by itself.
#[derive(Debug)]
pub struct MarketDataListener {
    algo: AlgoExecutionService,
}

impl MarketDataListener {
    pub fn new(algo: AlgoExecutionService) -> Self {
        Self { algo }
    }

    pub fn algo_execution_service(&self) -> &AlgoExecutionService {
        &self.algo
    }

    pub fn algo_execution_service_mut(&mut self) -> &mut AlgoExecutionService {
        &mut self.algo
    }

    pub fn into_algo_execution_service(self) -> AlgoExecutionService {
        self.algo
    }
}

impl Listener<OrderBook> for MarketDataListener {
    fn process_update(&mut self, book: &OrderBook) {
        self.algo.execute(book);
    }
}

/// Bridges algo-execution into venue routing, picking a venue uniformly at
/// random for every order the same way a smart-order-router would spray
/// flow across competing venues.
#[derive(Debug)]
pub struct AlgoExecutionListener<C> {
    execution: ExecutionService<C>,
}

impl<C: Connector<(Venue, ExecutionOrder)>> AlgoExecutionListener<C> {
    pub fn new(execution: ExecutionService<C>) -> Self {
        Self { execution }
    }

    pub fn execution_service(&self) -> &ExecutionService<C> {
        &self.execution
    }

    pub fn execution_service_mut(&mut self) -> &mut ExecutionService<C> {
        &mut self.execution
    }

    pub fn into_execution_service(self) -> ExecutionService<C> {
        self.execution
    }
}

impl<C: Connector<(Venue, ExecutionOrder)>> Listener<ExecutionOrder> for AlgoExecutionListener<C> {
    fn process_add(&mut self, order: &ExecutionOrder) {
        let venue = *Venue::ALL.choose(&mut rand::rng()).expect("Venue::ALL is non-empty");
        if let Err(err) = self.execution.execute_order(order.clone(), venue) {
            panic!("execution sink write failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_type::OrderType;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::rc::Rc;
    use trsy_core::Service;
    use trsy_marketdata::Order;
    use trsy_product::PricingSide;

    #[derive(Debug, Default)]
    struct RecordingConnector(Rc<RefCell<Vec<(Venue, ExecutionOrder)>>>);

    impl Connector<(Venue, ExecutionOrder)> for RecordingConnector {
        fn publish(&mut self, value: &(Venue, ExecutionOrder)) -> std::io::Result<()> {
            self.0.borrow_mut().push(value.clone());
            Ok(())
        }
    }

    #[test]
    fn market_data_update_drives_an_execution_through_to_the_venue() {
        let published = Rc::new(RefCell::new(Vec::new()));
        let execution = ExecutionService::new(RecordingConnector(published.clone()));
        let mut algo_listener = AlgoExecutionListener::new(execution);

        let order = ExecutionOrder::new(
            "912828M80".to_string(),
            PricingSide::Bid,
            "1".to_string(),
            OrderType::Market,
            dec!(99.6),
            300,
            700,
            "1".to_string(),
            false,
        );
        algo_listener.process_add(&order);
        assert_eq!(published.borrow().len(), 1);

        let mut market_listener = MarketDataListener::new(AlgoExecutionService::new());
        let book = OrderBook::new(
            "912828M80".to_string(),
            vec![Order::new(dec!(99.5), 500, PricingSide::Bid)],
            vec![Order::new(dec!(99.6), 500, PricingSide::Offer)],
        );
        market_listener.process_update(&book);
        assert_eq!(
            market_listener
                .algo_execution_service()
                .get_data(&"912828M80".to_string())
                .side,
            PricingSide::Bid
        );
    }
}
