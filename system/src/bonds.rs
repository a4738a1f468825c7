use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use trsy_core::{field, RecordFeed, TrsyError};
use trsy_product::{Bond, ProductError};
use trsy_risk::BucketedSector;

/// Reads `bonds.txt`: `CUSIP, coupon, ticker, maturity(YYYY-MM-DD)`. Read
/// once at startup to seed the risk service's PV01 table and sector
/// buckets — unlike the other feeds, a bond is never pushed through
/// `Service::on_message`, it only ever configures other services.
pub fn load_bonds(path: impl AsRef<Path>) -> Result<Vec<Bond>, TrsyError> {
    let mut records = RecordFeed::open(path)?;
    let mut bonds = Vec::with_capacity(records.remaining());
    while let Some(record) = records.pull() {
        match parse(&record) {
            Ok(bond) => bonds.push(bond),
            Err(err) => tracing::warn!(%err, "skipping malformed bond record"),
        }
    }
    Ok(bonds)
}

fn parse(record: &csv::StringRecord) -> Result<Bond, TrsyError> {
    let cusip = field(record, 0)?;
    let coupon_str = field(record, 1)?;
    let ticker = field(record, 2)?;
    let maturity_str = field(record, 3)?;

    let coupon: Decimal = coupon_str
        .parse()
        .map_err(|_| ProductError::MalformedPrice(coupon_str.to_string()))?;
    let maturity = NaiveDate::parse_from_str(maturity_str, "%Y-%m-%d")
        .map_err(|_| ProductError::MalformedMaturity(maturity_str.to_string()))?;

    Ok(Bond::new(cusip, ticker, coupon, maturity))
}

/// Per-bond risk sensitivity used to seed the risk service's PV01 table.
/// The original hardcodes one value per bond by file position
/// (`m_bond_pv01[bids[0]]=0.295`, …); this generalizes that to an arbitrary
/// bond list by deriving sensitivity from years-to-maturity, which is the
/// same quantity the original's authors would have been approximating by
/// hand-picking decreasing constants for a file ordered short-to-long.
pub fn pv01_per_unit(bond: &Bond, as_of: NaiveDate) -> Decimal {
    let years = bond.years_to_maturity(as_of).max(0);
    Decimal::from(years) * Decimal::new(22, 3) + Decimal::new(10, 3)
}

/// Buckets `bonds` into front-end (< 2y), belly (2-10y), and long-end
/// (> 10y) sectors as of `as_of`, the partition spec.md leaves to be fixed
/// externally.
pub fn bucket_sectors(bonds: &[Bond], as_of: NaiveDate) -> (BucketedSector, BucketedSector, BucketedSector) {
    let mut front_end = Vec::new();
    let mut belly = Vec::new();
    let mut long_end = Vec::new();

    for bond in bonds {
        let years = bond.years_to_maturity(as_of);
        let bucket = if years < 2 {
            &mut front_end
        } else if years <= 10 {
            &mut belly
        } else {
            &mut long_end
        };
        bucket.push(bond.cusip.clone());
    }

    (
        BucketedSector::new("front-end".to_string(), front_end),
        BucketedSector::new("belly".to_string(), belly),
        BucketedSector::new("long-end".to_string(), long_end),
    )
}
