#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Risk — PV01 and Bucketed Sector Risk
//!
//! [`RiskService`] holds a per-bond [`Pv01`] cache and computes
//! quantity-weighted [`SectorsRisk`] across a fixed sector partition,
//! fed by [`RiskListener`] registered on a position service.

pub mod listener;
pub mod pv01;
pub mod sector;
pub mod service;

pub use listener::RiskListener;
pub use pv01::Pv01;
pub use sector::{BucketedSector, SectorRisk, SectorsRisk};
pub use service::RiskService;
