use trsy_core::{Connector, Listener};
use trsy_product::Price;

use crate::algo::AlgoStreamingService;
use crate::service::StreamingService;
use crate::stream::PriceStream;

/// Bridges internal prices into algo-streaming. Every new `Price` is
/// actionable, not just updates — prices are never removed or corrected
/// in place in this system.
#[derive(Debug)]
pub struct PriceListener {
    algo: AlgoStreamingService,
}

impl PriceListener {
    pub fn new(algo: AlgoStreamingService) -> Self {
        Self { algo }
    }

    pub fn algo_streaming_service(&self) -> &AlgoStreamingService {
        &self.algo
    }

    pub fn algo_streaming_service_mut(&mut self) -> &mut AlgoStreamingService {
        &mut self.algo
    }

    pub fn into_algo_streaming_service(self) -> AlgoStreamingService {
        self.algo
    }
}

impl Listener<Price> for PriceListener {
    fn process_add(&mut self, price: &Price) {
        self.algo.execute(price);
    }
}

/// Bridges algo-streaming into the externally-published streaming service.
#[derive(Debug)]
pub struct AlgoStreamListener<C> {
    streaming: StreamingService<C>,
}

impl<C: Connector<PriceStream>> AlgoStreamListener<C> {
    pub fn new(streaming: StreamingService<C>) -> Self {
        Self { streaming }
    }

    pub fn streaming_service(&self) -> &StreamingService<C> {
        &self.streaming
    }

    pub fn streaming_service_mut(&mut self) -> &mut StreamingService<C> {
        &mut self.streaming
    }

    pub fn into_streaming_service(self) -> StreamingService<C> {
        self.streaming
    }
}

impl<C: Connector<PriceStream>> Listener<PriceStream> for AlgoStreamListener<C> {
    fn process_add(&mut self, stream: &PriceStream) {
        if let Err(err) = self.streaming.publish_price(stream.clone()) {
            panic!("streaming sink write failed: {err}");
        }
    }
}
