#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Core — Event Fabric
//!
//! The `Service` / `Listener` / `Connector` abstraction every domain service
//! in this system is built on, plus the [`KeyedCache`] primitive, the
//! aggregated [`TrsyError`] type, and logging init.
//!
//! Scheduling is single-threaded and cooperative: a feed calls
//! [`Service::on_message`] directly, fan-out to listeners is synchronous and
//! depth-first, and each handler runs to completion before the next one
//! starts. There is no queue and no async runtime here — the whole system
//! is one call stack.

pub mod cache;
pub mod connector;
pub mod error;
pub mod feed;
pub mod listener;
pub mod logging;
pub mod service;

pub use cache::{KeyedCache, UpsertOutcome};
pub use connector::Connector;
pub use error::{DataFormatError, TrsyError};
pub use feed::{field, RecordFeed};
pub use listener::{fan_add, fan_remove, fan_update, fan_upsert, Listener};
pub use service::Service;
