use std::path::Path;

use rust_decimal::Decimal;
use trsy_core::{field, DataFormatError, RecordFeed, Service, TrsyError};
use trsy_product::{codec, PricingSide};

use crate::order::{Order, OrderBook};
use crate::service::MarketDataService;

/// Volume synthesized at every depth level — the original source's fixed
/// `long volume = 10000000` in `BondMarketDataConnector::Subscribe`.
pub const SYNTHETIC_LEVEL_QTY: i64 = 10_000_000;

/// Depth levels synthesized per side from one top-of-book record.
const LEVELS: i64 = 5;

/// Reads `marketdata.txt`: `CUSIP, bid(32nds), offer(32nds)`. Each record
/// is a single top-of-book quote; this connector fans it out into five
/// price levels per side, ticking away from the touch by 1/256 per level,
/// all at [`SYNTHETIC_LEVEL_QTY`].
#[derive(Debug)]
pub struct MarketDataFeed {
    records: RecordFeed,
}

impl MarketDataFeed {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TrsyError> {
        Ok(Self {
            records: RecordFeed::open(path)?,
        })
    }

    pub fn pull_into(&mut self, service: &mut MarketDataService) -> bool {
        let Some(record) = self.records.pull() else {
            return false;
        };

        match parse(&record) {
            Ok(book) => service.on_message(book),
            Err(err) => tracing::warn!(%err, "skipping malformed market data record"),
        }
        true
    }
}

fn parse(record: &csv::StringRecord) -> Result<OrderBook, DataFormatError> {
    let field_err = |field: &str, expected: &'static str| DataFormatError::InvalidField {
        record: record.iter().collect::<Vec<_>>().join(","),
        field: field.to_string(),
        expected,
    };

    let product_id = field(record, 0)?;
    let bid_str = field(record, 1)?;
    let offer_str = field(record, 2)?;

    let top_bid = codec::decode(bid_str).map_err(|_| field_err(bid_str, "whole-32nds-256ths price"))?;
    let top_offer = codec::decode(offer_str).map_err(|_| field_err(offer_str, "whole-32nds-256ths price"))?;

    let tick = Decimal::ONE / Decimal::from(256);
    let mut bids = Vec::with_capacity(LEVELS as usize);
    let mut offers = Vec::with_capacity(LEVELS as usize);
    for level in 0..LEVELS {
        let step = tick * Decimal::from(level);
        bids.push(Order::new(top_bid - step, SYNTHETIC_LEVEL_QTY, PricingSide::Bid));
        offers.push(Order::new(top_offer + step, SYNTHETIC_LEVEL_QTY, PricingSide::Offer));
    }

    Ok(OrderBook::new(product_id.to_string(), bids, offers))
}
