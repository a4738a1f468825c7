use trsy_core::{fan_add, Connector, KeyedCache, Listener, Service, TrsyError};

use crate::stream::PriceStream;

/// Caches and republishes two-sided price streams to the external
/// streaming sink. `publish_price` always fans `ProcessAdd`, matching
/// algo-streaming upstream of it.
#[derive(Debug)]
pub struct StreamingService<C> {
    cache: KeyedCache<String, PriceStream>,
    listeners: Vec<Box<dyn Listener<PriceStream>>>,
    connector: C,
}

impl<C: Connector<PriceStream>> StreamingService<C> {
    pub fn new(connector: C) -> Self {
        Self {
            cache: KeyedCache::new(),
            listeners: Vec::new(),
            connector,
        }
    }

    pub fn publish_price(&mut self, stream: PriceStream) -> Result<(), TrsyError> {
        self.cache.upsert(stream.product_id.clone(), stream.clone());
        fan_add(&mut self.listeners, &stream);
        self.connector.publish(&stream)?;
        Ok(())
    }
}

impl<C: Connector<PriceStream>> Service<String, PriceStream> for StreamingService<C> {
    fn get_data(&self, key: &String) -> &PriceStream {
        self.cache.get(key)
    }

    fn on_message(&mut self, _value: PriceStream) {
        // Price streams only ever arrive via `publish_price`.
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<PriceStream>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Box<dyn Listener<PriceStream>>] {
        &self.listeners
    }
}
