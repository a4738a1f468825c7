use trsy_core::Listener;
use trsy_position::Position;

use crate::service::RiskService;

/// Registered first on [`trsy_position::PositionService`]; translates a
/// position event into [`RiskService::add_position`].
#[derive(Debug)]
pub struct RiskListener {
    risk: RiskService,
}

impl RiskListener {
    pub fn new(risk: RiskService) -> Self {
        Self { risk }
    }

    pub fn risk_service(&self) -> &RiskService {
        &self.risk
    }

    pub fn risk_service_mut(&mut self) -> &mut RiskService {
        &mut self.risk
    }
}

impl Listener<Position> for RiskListener {
    fn process_add(&mut self, position: &Position) {
        self.risk.add_position(&position.product_id, position.aggregate());
    }

    fn process_update(&mut self, position: &Position) {
        self.risk.add_position(&position.product_id, position.aggregate());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::BucketedSector;
    use rust_decimal_macros::dec;
    use trsy_core::Service;

    fn risk_listener() -> RiskListener {
        let table = vec![("A".to_string(), dec!(0.04))];
        let front_end = BucketedSector::new("front-end".to_string(), vec!["A".to_string()]);
        let belly = BucketedSector::new("belly".to_string(), vec![]);
        let long_end = BucketedSector::new("long-end".to_string(), vec![]);
        RiskListener::new(RiskService::new(table, front_end, belly, long_end))
    }

    #[test]
    fn a_position_add_updates_the_bonds_risk_quantity() {
        let mut listener = risk_listener();
        let mut position = Position::new("A");
        position.add("TRSY1", 1_000_000);
        listener.process_add(&position);
        assert_eq!(listener.risk_service().get_data(&"A".to_string()).quantity, 1_000_000);
    }
}
