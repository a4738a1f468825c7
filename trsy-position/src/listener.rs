use trsy_booking::Trade;
use trsy_core::Listener;

use crate::service::PositionService;

/// Registered on [`trsy_booking::BookingService`]; translates trade events
/// into [`PositionService`] calls. `ProcessAdd` and `ProcessRemove` both
/// aggregate the trade's signed quantity (a reversal is simply a trade
/// whose side was already flipped by the booking service); `ProcessUpdate`
/// re-emits without changing the aggregate.
#[derive(Debug)]
pub struct PositionListener {
    position: PositionService,
}

impl PositionListener {
    pub fn new(position: PositionService) -> Self {
        Self { position }
    }

    pub fn position_service(&self) -> &PositionService {
        &self.position
    }

    pub fn position_service_mut(&mut self) -> &mut PositionService {
        &mut self.position
    }

    pub fn into_position_service(self) -> PositionService {
        self.position
    }
}

impl Listener<Trade> for PositionListener {
    fn process_add(&mut self, trade: &Trade) {
        self.position
            .add_trade(&trade.product_id, &trade.book_id, trade.signed_quantity());
    }

    fn process_update(&mut self, trade: &Trade) {
        self.position.reemit(&trade.product_id);
    }

    fn process_remove(&mut self, trade: &Trade) {
        self.position
            .add_trade(&trade.product_id, &trade.book_id, trade.signed_quantity());
    }
}
