use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use trsy_core::Connector;
use trsy_product::{codec, PricingSide};

use crate::execution_order::ExecutionOrder;
use crate::order_type::Venue;

/// Appends routed execution orders to `Output/ExecutionOrders.txt`:
/// `orderId, CUSIP, side(BID|OFFER), orderType, visible, hidden, venue,
/// price(32nds)`.
#[derive(Debug)]
pub struct ExecutionOrderConnector {
    path: PathBuf,
}

impl ExecutionOrderConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Connector<(Venue, ExecutionOrder)> for ExecutionOrderConnector {
    fn publish(&mut self, value: &(Venue, ExecutionOrder)) -> std::io::Result<()> {
        let (venue, order) = value;
        let side = match order.side {
            PricingSide::Bid => "BID",
            PricingSide::Offer => "OFFER",
        };
        let line = format!(
            "{},{},{},{},{},{},{},{}\n",
            order.order_id,
            order.product_id,
            side,
            order.order_type,
            order.visible_quantity,
            order.hidden_quantity,
            venue,
            codec::encode(order.price),
        );

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_type::OrderType;
    use rust_decimal_macros::dec;
    use std::fs;

    #[test]
    fn publish_appends_a_csv_line_with_the_32nds_encoded_price() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut connector = ExecutionOrderConnector::new(file.path());

        let order = ExecutionOrder::new(
            "912828M80".to_string(),
            PricingSide::Bid,
            "1".to_string(),
            OrderType::Market,
            dec!(100.15625),
            300,
            700,
            "1".to_string(),
            false,
        );
        connector.publish(&(Venue::Brokertec, order)).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "1,912828M80,BID,MARKET,300,700,BROKERTEC,100-050\n");
    }
}
