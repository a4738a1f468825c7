use std::path::Path;

use trsy_core::{field, DataFormatError, RecordFeed, TrsyError};
use trsy_product::{codec, Price};

/// Reads `prices.txt`: `CUSIP, bid(32nds), offer(32nds), spread(256ths)`.
/// Mid is `(bid + offer) / 2`; spread is the raw 256ths field divided by
/// 256, not `offer - bid` — the two agree only when the feed's quoted
/// spread field matches the actual bid/offer gap.
#[derive(Debug)]
pub struct PriceFeed {
    records: RecordFeed,
}

impl PriceFeed {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TrsyError> {
        Ok(Self {
            records: RecordFeed::open(path)?,
        })
    }

    /// Pull one record and return the [`Price`] it describes. Returns
    /// `None` once the feed is exhausted; a malformed record is logged and
    /// skipped, and the next record (if any) is returned instead.
    pub fn pull(&mut self) -> Option<Price> {
        loop {
            let record = self.records.pull()?;
            match parse(&record) {
                Ok(price) => return Some(price),
                Err(err) => tracing::warn!(%err, "skipping malformed price record"),
            }
        }
    }
}

fn parse(record: &csv::StringRecord) -> Result<Price, DataFormatError> {
    let product_id = field(record, 0)?;
    let bid_str = field(record, 1)?;
    let offer_str = field(record, 2)?;
    let spread_256_str = field(record, 3)?;

    let invalid = |value: &str, expected: &'static str| DataFormatError::InvalidField {
        record: record.iter().collect::<Vec<_>>().join(","),
        field: value.to_string(),
        expected,
    };

    let bid = codec::decode(bid_str).map_err(|_| invalid(bid_str, "32nds-encoded bid price"))?;
    let offer = codec::decode(offer_str).map_err(|_| invalid(offer_str, "32nds-encoded offer price"))?;
    let spread_256: i64 = spread_256_str
        .parse()
        .map_err(|_| invalid(spread_256_str, "integer 256ths spread"))?;

    let mid = (bid + offer) / rust_decimal::Decimal::TWO;
    let spread = rust_decimal::Decimal::from(spread_256) / rust_decimal::Decimal::from(256);

    Ok(Price::new(product_id.to_string(), mid, spread))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn pulls_a_price_with_mid_and_spread_derived_from_the_feed() {
        let file = write_temp("912828M80,99-160,100-000,64\n");
        let mut feed = PriceFeed::open(file.path()).unwrap();

        let price = feed.pull().unwrap();
        assert_eq!(price.product_id, "912828M80");
        assert_eq!(price.mid, (dec!(99.5) + dec!(100)) / dec!(2));
        assert_eq!(price.spread, dec!(64) / dec!(256));
        assert!(feed.pull().is_none());
    }
}
