use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-bond interest-rate risk. `quantity` is always kept non-negative —
/// sector aggregation weights by size, not direction.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct Pv01 {
    pub product_id: String,
    pub pv01_per_unit: Decimal,
    pub quantity: i64,
}
