#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Product — Bond Identity & Fractional Price Codec
//!
//! Defines the immutable [`Bond`] product and the [`Price`] value type used
//! throughout the trading system, plus the `whole-32nds-256ths` Treasury
//! price codec (`encode`/`decode`) that every feed and sink in this system
//! round-trips through.

pub mod bond;
pub mod codec;
pub mod error;
pub mod price;

pub use bond::Bond;
pub use error::ProductError;
pub use price::{Price, PricingSide, TradeSide};
