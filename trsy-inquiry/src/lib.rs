#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Inquiry
//!
//! [`InquiryService`] drives a client inquiry through `RECEIVED -> QUOTED
//! -> DONE` with a fixed quote price, or straight to `CUSTOMER_REJECTED`
//! via [`InquiryService::reject_inquiry`].

pub mod feed;
pub mod inquiry;
pub mod service;

pub use feed::InquiryFeed;
pub use inquiry::{Inquiry, InquiryState};
pub use service::{InquiryService, FIXED_QUOTE_PRICE};
