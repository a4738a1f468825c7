use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use trsy_core::{Connector, Listener};
use trsy_execution::ExecutionOrder;
use trsy_product::{codec, PricingSide};

use crate::sink::HistoricalSink;

/// Appends `key, orderId, CUSIP, side, orderType, visible, hidden,
/// price(32nds)` to `Output/Historical/executions.txt` — the
/// `ExecutionOrders.txt` schema prefixed with the persistence key, minus
/// the venue (not yet known to the execution order itself at this point
/// in the original's pipeline).
#[derive(Debug)]
pub struct ExecutionHistoricalConnector {
    path: PathBuf,
}

impl ExecutionHistoricalConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Connector<(String, ExecutionOrder)> for ExecutionHistoricalConnector {
    fn publish(&mut self, value: &(String, ExecutionOrder)) -> std::io::Result<()> {
        let (key, order) = value;
        let side = match order.side {
            PricingSide::Bid => "BID",
            PricingSide::Offer => "OFFER",
        };
        let line = format!(
            "{},{},{},{},{},{},{},{}\n",
            key,
            order.order_id,
            order.product_id,
            side,
            order.order_type,
            order.visible_quantity,
            order.hidden_quantity,
            codec::encode(order.price),
        );

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

/// Logs every routed execution order.
#[derive(Debug)]
pub struct ExecutionHistoricalListener<C> {
    sink: HistoricalSink<ExecutionOrder, C>,
}

impl<C: Connector<(String, ExecutionOrder)>> ExecutionHistoricalListener<C> {
    pub fn new(connector: C) -> Self {
        Self {
            sink: HistoricalSink::new(connector),
        }
    }
}

impl<C: Connector<(String, ExecutionOrder)>> Listener<ExecutionOrder> for ExecutionHistoricalListener<C> {
    fn process_add(&mut self, order: &ExecutionOrder) {
        if let Err(err) = self.sink.persist(order.clone()) {
            panic!("execution historical sink write failed: {err}");
        }
    }
}
