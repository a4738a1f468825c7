use thiserror::Error;
use trsy_product::ProductError;

/// Aggregated error type for the treasury trading system.
///
/// Subsystem crates define their own narrower error enums and convert into
/// this one at the boundary where a result needs to cross into orchestration
/// code (`system`'s feed-pulling loop, mainly).
#[derive(Debug, Error)]
pub enum TrsyError {
    #[error("product error: {0}")]
    Product(#[from] ProductError),

    #[error("data format error: {0}")]
    DataFormat(#[from] DataFormatError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A feed record was structurally present but semantically unparseable:
/// a missing column, a field that doesn't parse as the expected type, or
/// an enum tag the system doesn't recognize. Per the feed-parsing contract,
/// callers skip the record and log rather than aborting the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataFormatError {
    #[error("record {record:?} is missing field {index}")]
    MissingField { record: String, index: usize },

    #[error("field {field:?} in record {record:?} is not a valid {expected}")]
    InvalidField {
        record: String,
        field: String,
        expected: &'static str,
    },
}
