#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Booking — Trade Ingest
//!
//! Ingests trades keyed by trade-id, fanning `ProcessAdd`/`ProcessUpdate`
//! on booking and `ProcessRemove` on reversal.

pub mod feed;
pub mod service;
pub mod trade;

pub use feed::TradeFeed;
pub use service::BookingService;
pub use trade::Trade;
