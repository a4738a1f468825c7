mod execution;
mod inquiry;
mod position;
mod risk;
mod sink;
mod streaming;

pub use execution::{ExecutionHistoricalConnector, ExecutionHistoricalListener};
pub use inquiry::{InquiryHistoricalConnector, InquiryHistoricalListener};
pub use position::{PositionHistoricalConnector, PositionHistoricalListener};
pub use risk::{Pv01JoinListener, RiskHistoricalConnector, RiskRecord, SectorsRiskJoinListener};
pub use sink::HistoricalSink;
pub use streaming::{StreamHistoricalListener, StreamingHistoricalConnector};
