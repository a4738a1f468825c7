#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Pricing, Algo-Streaming, and Streaming
//!
//! [`Price`] carries an internal mid/spread quote. [`AlgoStreamingService`]
//! turns each one into a two-sided [`PriceStream`] with randomized
//! visible/hidden quantities; [`StreamingService`] caches and republishes
//! it to the external streaming sink.

pub mod algo;
pub mod connector;
pub mod feed;
pub mod listener;
pub mod service;
pub mod stream;

pub use algo::AlgoStreamingService;
pub use connector::PriceStreamConnector;
pub use feed::PriceFeed;
pub use listener::{AlgoStreamListener, PriceListener};
pub use service::StreamingService;
pub use stream::{PriceStream, PriceStreamOrder};
pub use trsy_product::Price;
