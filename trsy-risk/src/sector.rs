use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named, fixed group of products whose risk is reported in aggregate.
/// Membership is supplied at startup and never changes during a run.
#[derive(Debug, Clone, Constructor, Serialize, Deserialize)]
pub struct BucketedSector {
    pub name: String,
    pub product_ids: Vec<String>,
}

/// Quantity-weighted PV01 for a single [`BucketedSector`]: `Σ|q_i|·pv01_i /
/// Σ|q_i|`, or zero if every member's quantity is zero.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct SectorRisk {
    pub sector_name: String,
    pub pv01: Decimal,
    pub quantity: i64,
}

/// The three fixed sector buckets reported together as one event, so a
/// downstream join against a per-bond PV01 update always has all three at
/// once rather than three independent partial views.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct SectorsRisk {
    pub front_end: SectorRisk,
    pub belly: SectorRisk,
    pub long_end: SectorRisk,
}
