#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Algo-Execution and Venue Routing
//!
//! [`AlgoExecutionService`] crosses the best level of every fresh
//! aggregated book, alternating sides per product. [`ExecutionService`]
//! routes the resulting [`ExecutionOrder`] to a randomly chosen [`Venue`]
//! and persists it.

pub mod algo;
pub mod connector;
pub mod execution_order;
pub mod listener;
pub mod order_type;
pub mod service;

pub use algo::AlgoExecutionService;
pub use connector::ExecutionOrderConnector;
pub use execution_order::ExecutionOrder;
pub use listener::{AlgoExecutionListener, MarketDataListener};
pub use order_type::{OrderType, Venue};
pub use service::ExecutionService;
