use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use trsy_core::{Connector, Listener};
use trsy_inquiry::Inquiry;
use trsy_product::{codec, TradeSide};

use crate::sink::HistoricalSink;

/// Appends `key, inquiryId, CUSIP, side, quantity, price(32nds), state` to
/// `Output/Historical/allinquiries.txt`.
#[derive(Debug)]
pub struct InquiryHistoricalConnector {
    path: PathBuf,
}

impl InquiryHistoricalConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Connector<(String, Inquiry)> for InquiryHistoricalConnector {
    fn publish(&mut self, value: &(String, Inquiry)) -> std::io::Result<()> {
        let (key, inquiry) = value;
        let side = match inquiry.side {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        };
        let line = format!(
            "{},{},{},{},{},{},{}\n",
            key,
            inquiry.inquiry_id,
            inquiry.product_id,
            side,
            inquiry.quantity,
            codec::encode(inquiry.price),
            inquiry.state,
        );

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

/// Logs every inquiry transition. Every state the inquiry service produces
/// — `RECEIVED` via `ProcessAdd`, `QUOTED` and `DONE` (and the terminal
/// rejection states) via `ProcessUpdate` — is logged exactly once, since
/// the service itself re-enters with one event per transition rather than
/// bundling several into a single callback.
#[derive(Debug)]
pub struct InquiryHistoricalListener<C> {
    sink: HistoricalSink<Inquiry, C>,
}

impl<C: Connector<(String, Inquiry)>> InquiryHistoricalListener<C> {
    pub fn new(connector: C) -> Self {
        Self {
            sink: HistoricalSink::new(connector),
        }
    }

    fn log(&mut self, inquiry: &Inquiry) {
        if let Err(err) = self.sink.persist(inquiry.clone()) {
            panic!("inquiry historical sink write failed: {err}");
        }
    }
}

impl<C: Connector<(String, Inquiry)>> Listener<Inquiry> for InquiryHistoricalListener<C> {
    fn process_add(&mut self, inquiry: &Inquiry) {
        self.log(inquiry);
    }

    fn process_update(&mut self, inquiry: &Inquiry) {
        self.log(inquiry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;
    use trsy_inquiry::{InquiryService, FIXED_QUOTE_PRICE};
    use trsy_core::Service;

    #[test]
    fn a_full_workflow_logs_received_quoted_then_done() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut service = InquiryService::new();
        service.add_listener(Box::new(InquiryHistoricalListener::new(InquiryHistoricalConnector::new(
            file.path(),
        ))));

        let received = Inquiry::new(
            "IQ1".to_string(),
            "X".to_string(),
            TradeSide::Buy,
            1_000_000,
            dec!(99.5),
            trsy_inquiry::InquiryState::Received,
        );
        service.on_message(received);

        let contents = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("RECEIVED"));
        assert!(lines[1].ends_with(&format!("{},QUOTED", codec::encode(FIXED_QUOTE_PRICE))));
        assert!(lines[2].ends_with("DONE"));
    }
}
