use std::path::Path;

use trsy_core::{field, DataFormatError, RecordFeed, Service, TrsyError};
use trsy_product::{codec, TradeSide};

use crate::inquiry::{Inquiry, InquiryState};
use crate::service::InquiryService;

/// Reads `inquiries.txt`: `inquiryId, CUSIP, side(BUY|SELL), quantity,
/// price(32nds)`. Every record arrives in state `RECEIVED`.
#[derive(Debug)]
pub struct InquiryFeed {
    records: RecordFeed,
}

impl InquiryFeed {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TrsyError> {
        Ok(Self {
            records: RecordFeed::open(path)?,
        })
    }

    /// Pull one record and ingest it into `service`. Returns `false` once
    /// the feed is exhausted.
    pub fn pull_into(&mut self, service: &mut InquiryService) -> bool {
        let Some(record) = self.records.pull() else {
            return false;
        };

        match parse(&record) {
            Ok(inquiry) => service.on_message(inquiry),
            Err(err) => tracing::warn!(%err, "skipping malformed inquiry record"),
        }
        true
    }
}

fn parse(record: &csv::StringRecord) -> Result<Inquiry, DataFormatError> {
    let inquiry_id = field(record, 0)?;
    let product_id = field(record, 1)?;
    let side_str = field(record, 2)?;
    let quantity_str = field(record, 3)?;
    let price_str = field(record, 4)?;

    let invalid = |value: &str, expected: &'static str| DataFormatError::InvalidField {
        record: record.iter().collect::<Vec<_>>().join(","),
        field: value.to_string(),
        expected,
    };

    let side = match side_str {
        "BUY" => TradeSide::Buy,
        "SELL" => TradeSide::Sell,
        _ => return Err(invalid(side_str, "BUY or SELL")),
    };

    let quantity: i64 = quantity_str.parse().map_err(|_| invalid(quantity_str, "integer quantity"))?;
    let price = codec::decode(price_str).map_err(|_| invalid(price_str, "32nds-encoded price"))?;

    Ok(Inquiry::new(
        inquiry_id.to_string(),
        product_id.to_string(),
        side,
        quantity,
        price,
        InquiryState::Received,
    ))
}
