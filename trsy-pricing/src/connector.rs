use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use trsy_core::Connector;
use trsy_product::codec;

use crate::stream::PriceStream;

/// Appends published price streams to `Output/PriceStreams.txt`:
/// `CUSIP, bid(32nds), bidVis, bidHid, offer(32nds), offerVis, offerHid`.
#[derive(Debug)]
pub struct PriceStreamConnector {
    path: PathBuf,
}

impl PriceStreamConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Connector<PriceStream> for PriceStreamConnector {
    fn publish(&mut self, stream: &PriceStream) -> std::io::Result<()> {
        let line = format!(
            "{},{},{},{},{},{},{}\n",
            stream.product_id,
            codec::encode(stream.bid_order.price),
            stream.bid_order.visible_quantity,
            stream.bid_order.hidden_quantity,
            codec::encode(stream.offer_order.price),
            stream.offer_order.visible_quantity,
            stream.offer_order.hidden_quantity,
        );

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::PriceStreamOrder;
    use rust_decimal_macros::dec;
    use std::fs;
    use trsy_product::PricingSide;

    #[test]
    fn publish_appends_a_csv_line_with_32nds_encoded_prices() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut connector = PriceStreamConnector::new(file.path());

        let stream = PriceStream::new(
            "912828M80".to_string(),
            PriceStreamOrder::new(dec!(99.5), 10_000, 15_000, PricingSide::Bid),
            PriceStreamOrder::new(dec!(100), 20_000, 30_000, PricingSide::Offer),
        );
        connector.publish(&stream).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "912828M80,99-160,10000,15000,100-000,20000,30000\n");
    }
}
