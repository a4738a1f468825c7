use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing a product or a fractional price.
///
/// These are format errors in the sense of spec §7a: callers parsing a feed
/// record should skip the record and log, not propagate a panic.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize, Error)]
pub enum ProductError {
    #[error("malformed fractional price {0:?}: expected WHOLE-XXY with a 3-char fractional part")]
    MalformedPrice(String),

    #[error("malformed maturity date {0:?}: expected YYYY-MM-DD")]
    MalformedMaturity(String),

    #[error("missing field at index {index} in record {record:?}")]
    MissingField { record: String, index: usize },

    #[error("unknown CUSIP {0:?}")]
    UnknownCusip(String),
}
