use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use trsy_core::{Connector, Listener};
use trsy_pricing::PriceStream;
use trsy_product::codec;

use crate::sink::HistoricalSink;

/// Appends the `PriceStreams.txt` schema prefixed with the persistence key
/// to `Output/Historical/streaming.txt`.
#[derive(Debug)]
pub struct StreamingHistoricalConnector {
    path: PathBuf,
}

impl StreamingHistoricalConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Connector<(String, PriceStream)> for StreamingHistoricalConnector {
    fn publish(&mut self, value: &(String, PriceStream)) -> std::io::Result<()> {
        let (key, stream) = value;
        let line = format!(
            "{},{},{},{},{},{},{},{}\n",
            key,
            stream.product_id,
            codec::encode(stream.bid_order.price),
            stream.bid_order.visible_quantity,
            stream.bid_order.hidden_quantity,
            codec::encode(stream.offer_order.price),
            stream.offer_order.visible_quantity,
            stream.offer_order.hidden_quantity,
        );

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

/// Logs every published price stream.
#[derive(Debug)]
pub struct StreamHistoricalListener<C> {
    sink: HistoricalSink<PriceStream, C>,
}

impl<C: Connector<(String, PriceStream)>> StreamHistoricalListener<C> {
    pub fn new(connector: C) -> Self {
        Self {
            sink: HistoricalSink::new(connector),
        }
    }
}

impl<C: Connector<(String, PriceStream)>> Listener<PriceStream> for StreamHistoricalListener<C> {
    fn process_add(&mut self, stream: &PriceStream) {
        if let Err(err) = self.sink.persist(stream.clone()) {
            panic!("streaming historical sink write failed: {err}");
        }
    }
}
