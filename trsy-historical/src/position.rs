use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use trsy_core::{Connector, Listener};
use trsy_position::Position;

use crate::sink::HistoricalSink;

/// Appends `key, CUSIP, aggregate, TRSY1, TRSY2, TRSY3` to
/// `Output/Historical/position.txt`.
#[derive(Debug)]
pub struct PositionHistoricalConnector {
    path: PathBuf,
}

impl PositionHistoricalConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Connector<(String, Position)> for PositionHistoricalConnector {
    fn publish(&mut self, value: &(String, Position)) -> std::io::Result<()> {
        let (key, position) = value;
        let book = |id: &str| position.books.get(id).copied().unwrap_or(0);
        let line = format!(
            "{},{},{},{},{},{}\n",
            key,
            position.product_id,
            position.aggregate(),
            book("TRSY1"),
            book("TRSY2"),
            book("TRSY3"),
        );

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

/// Logs every position change, fed by both a fresh aggregation (the
/// product's first trade) and a subsequent re-aggregation — unlike the
/// source system's listener, which only reacted to updates and so missed
/// a product's very first trade.
#[derive(Debug)]
pub struct PositionHistoricalListener<C> {
    sink: HistoricalSink<Position, C>,
}

impl<C: Connector<(String, Position)>> PositionHistoricalListener<C> {
    pub fn new(connector: C) -> Self {
        Self {
            sink: HistoricalSink::new(connector),
        }
    }

    fn log(&mut self, position: &Position) {
        if let Err(err) = self.sink.persist(position.clone()) {
            panic!("position historical sink write failed: {err}");
        }
    }
}

impl<C: Connector<(String, Position)>> Listener<Position> for PositionHistoricalListener<C> {
    fn process_add(&mut self, position: &Position) {
        self.log(position);
    }

    fn process_update(&mut self, position: &Position) {
        self.log(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn publish_writes_three_book_columns_in_fixed_order() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut connector = PositionHistoricalConnector::new(file.path());

        let mut position = Position::new("912828M80");
        position.add("TRSY1", 1_000_000);
        connector.publish(&("1".to_string(), position)).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "1,912828M80,1000000,1000000,0,0\n");
    }

    #[test]
    fn listener_logs_both_the_first_add_and_later_updates() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut listener = PositionHistoricalListener::new(PositionHistoricalConnector::new(file.path()));

        let mut position = Position::new("912828M80");
        position.add("TRSY1", 1_000_000);
        listener.process_add(&position);
        position.add("TRSY1", -500_000);
        listener.process_update(&position);

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
