use std::path::Path;

use rust_decimal::Decimal;
use trsy_core::{field, DataFormatError, RecordFeed, Service, TrsyError};
use trsy_product::TradeSide;

use crate::service::BookingService;
use crate::trade::Trade;

/// Reads `trades.txt`: `tradeId, CUSIP, bookId, quantity, side(BUY|SELL),
/// price`. `price` is a plain decimal, not the 32nds/256ths codec form —
/// the original feed writes trade prices in decimal, unlike the quote and
/// market-data feeds.
#[derive(Debug)]
pub struct TradeFeed {
    records: RecordFeed,
}

impl TradeFeed {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TrsyError> {
        Ok(Self {
            records: RecordFeed::open(path)?,
        })
    }

    /// Pull one record and ingest it into `service`. Returns `false` once
    /// the feed is exhausted. A malformed record is logged and skipped
    /// without consuming a "pull" from the caller's perspective — the
    /// caller should retry or stop based on the feed's own exhaustion.
    pub fn pull_into(&mut self, service: &mut BookingService) -> bool {
        let Some(record) = self.records.pull() else {
            return false;
        };

        match parse(&record) {
            Ok(trade) => service.on_message(trade),
            Err(err) => tracing::warn!(%err, "skipping malformed trade record"),
        }
        true
    }
}

fn parse(record: &csv::StringRecord) -> Result<Trade, DataFormatError> {
    let trade_id = field(record, 0)?;
    let product_id = field(record, 1)?;
    let book_id = field(record, 2)?;
    let quantity_str = field(record, 3)?;
    let side_str = field(record, 4)?;
    let price_str = field(record, 5)?;

    let quantity: i64 = quantity_str.parse().map_err(|_| DataFormatError::InvalidField {
        record: record.iter().collect::<Vec<_>>().join(","),
        field: quantity_str.to_string(),
        expected: "integer quantity",
    })?;

    let side = match side_str {
        "BUY" => TradeSide::Buy,
        "SELL" => TradeSide::Sell,
        _ => {
            return Err(DataFormatError::InvalidField {
                record: record.iter().collect::<Vec<_>>().join(","),
                field: side_str.to_string(),
                expected: "BUY or SELL",
            })
        }
    };

    let price: Decimal = price_str.parse().map_err(|_| DataFormatError::InvalidField {
        record: record.iter().collect::<Vec<_>>().join(","),
        field: price_str.to_string(),
        expected: "decimal price",
    })?;

    Ok(Trade::new(
        trade_id.to_string(),
        product_id.to_string(),
        book_id.to_string(),
        quantity,
        side,
        price,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn pulls_one_trade_per_call_and_books_it() {
        let file = write_temp("T1,912828M80,TRSY1,1000000,BUY,99.5\n");
        let mut feed = TradeFeed::open(file.path()).unwrap();
        let mut service = BookingService::new();

        assert!(feed.pull_into(&mut service));
        assert!(!feed.pull_into(&mut service));

        let booked = service.get_data(&"T1".to_string());
        assert_eq!(booked.product_id, "912828M80");
        assert_eq!(booked.quantity, 1_000_000);
        assert_eq!(booked.side, TradeSide::Buy);
    }

    #[test]
    fn malformed_record_is_skipped_but_does_not_stop_the_feed() {
        let file = write_temp("T1,912828M80,TRSY1,NOTANUMBER,BUY,99.5\nT2,912828M80,TRSY1,500,SELL,99.5\n");
        let mut feed = TradeFeed::open(file.path()).unwrap();
        let mut service = BookingService::new();

        assert!(feed.pull_into(&mut service));
        assert!(feed.pull_into(&mut service));
        assert!(!feed.pull_into(&mut service));

        assert_eq!(service.get_data(&"T2".to_string()).quantity, 500);
    }
}
