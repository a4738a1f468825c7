use trsy_core::{fan_add, fan_update, KeyedCache, Listener, Service, UpsertOutcome};

use crate::position::Position;

/// Maintains a [`Position`] per product, keyed by product-id.
///
/// Fed by [`crate::listener::PositionListener`], which translates booking
/// events into calls on the two methods below.
#[derive(Debug, Default)]
pub struct PositionService {
    cache: KeyedCache<String, Position>,
    listeners: Vec<Box<dyn Listener<Position>>>,
}

impl PositionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trade was booked (freshly or via reversal): add its signed
    /// quantity to the product's position and fan the result.
    pub fn add_trade(&mut self, product_id: &str, book_id: &str, signed_quantity: i64) {
        let (position, outcome) = self
            .cache
            .get_or_insert_with(product_id.to_string(), || Position::new(product_id));
        position.add(book_id, signed_quantity);
        let snapshot = position.clone();
        match outcome {
            UpsertOutcome::Added => fan_add(&mut self.listeners, &snapshot),
            UpsertOutcome::Replaced => fan_update(&mut self.listeners, &snapshot),
        }
    }

    /// A trade amendment that isn't a quantity change (the booking
    /// service's `ProcessUpdate`, not a reversal): re-emit the existing
    /// position unchanged.
    pub fn reemit(&mut self, product_id: &str) {
        let position = self.cache.get(&product_id.to_string()).clone();
        fan_update(&mut self.listeners, &position);
    }
}

impl Service<String, Position> for PositionService {
    fn get_data(&self, key: &String) -> &Position {
        self.cache.get(key)
    }

    fn on_message(&mut self, _value: Position) {
        // Positions are only ever produced by add_trade/reemit; nothing
        // ingests a Position value directly.
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<Position>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Box<dyn Listener<Position>>] {
        &self.listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_add_creates_and_fans_add() {
        let mut service = PositionService::new();
        service.add_trade("912828M80", "TRSY1", 1_000_000);
        assert_eq!(service.get_data(&"912828M80".to_string()).aggregate(), 1_000_000);
    }

    #[test]
    fn reversal_cancels_the_aggregate() {
        let mut service = PositionService::new();
        service.add_trade("912828M80", "TRSY1", 1_000_000);
        service.add_trade("912828M80", "TRSY1", -1_000_000);
        assert_eq!(service.get_data(&"912828M80".to_string()).aggregate(), 0);
    }
}
