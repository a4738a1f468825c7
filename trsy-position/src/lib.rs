#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Position — Per-Book and Aggregate Positions
//!
//! [`PositionService`] holds a [`Position`] per product, fed by
//! [`PositionListener`] registered on a trade-booking service.

pub mod listener;
pub mod position;
pub mod service;

pub use listener::PositionListener;
pub use position::Position;
pub use service::PositionService;
