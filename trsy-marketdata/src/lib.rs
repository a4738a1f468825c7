#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Market Data — Multi-Venue Depth Aggregation
//!
//! [`MarketDataService`] holds one order book per venue update per
//! product and merges them on demand into a single depth view.

pub mod feed;
pub mod order;
pub mod service;

pub use feed::{MarketDataFeed, SYNTHETIC_LEVEL_QTY};
pub use order::{Order, OrderBook};
pub use service::MarketDataService;
