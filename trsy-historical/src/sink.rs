use trsy_core::{Connector, TrsyError};

/// Persists `(key, value)` pairs to an append-only sink, keyed by a
/// monotonically increasing decimal counter starting at 1.
#[derive(Debug)]
pub struct HistoricalSink<V, C> {
    next_key: u64,
    connector: C,
    _marker: std::marker::PhantomData<V>,
}

impl<V, C: Connector<(String, V)>> HistoricalSink<V, C> {
    pub fn new(connector: C) -> Self {
        Self {
            next_key: 1,
            connector,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn persist(&mut self, value: V) -> Result<(), TrsyError> {
        let key = self.next_key.to_string();
        self.next_key += 1;
        self.connector.publish(&(key, value))?;
        Ok(())
    }
}
