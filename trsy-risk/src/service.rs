use rust_decimal::Decimal;

use trsy_core::{fan_update, KeyedCache, Listener, Service};

use crate::pv01::Pv01;
use crate::sector::{BucketedSector, SectorRisk, SectorsRisk};

/// Per-bond PV01 plus quantity-weighted bucketed sector risk.
///
/// Two independent listener lists mirror the original's two `AddListener`
/// overloads: `bond_listeners` sees every per-bond [`Pv01`] update,
/// `sector_listeners` sees one [`SectorsRisk`] triple (front-end, belly,
/// long-end together) recomputed every time a position changes.
#[derive(Debug)]
pub struct RiskService {
    cache: KeyedCache<String, Pv01>,
    bond_listeners: Vec<Box<dyn Listener<Pv01>>>,
    sector_listeners: Vec<Box<dyn Listener<SectorsRisk>>>,
    front_end: BucketedSector,
    belly: BucketedSector,
    long_end: BucketedSector,
}

impl RiskService {
    /// Seed the PV01 cache from a static product→pv01 table, all
    /// quantities starting at zero, and fix the sector partition for the
    /// life of the service.
    pub fn new(
        pv01_table: impl IntoIterator<Item = (String, Decimal)>,
        front_end: BucketedSector,
        belly: BucketedSector,
        long_end: BucketedSector,
    ) -> Self {
        let mut cache = KeyedCache::new();
        for (product_id, pv01_per_unit) in pv01_table {
            cache.upsert(product_id.clone(), Pv01::new(product_id, pv01_per_unit, 0));
        }
        Self {
            cache,
            bond_listeners: Vec::new(),
            sector_listeners: Vec::new(),
            front_end,
            belly,
            long_end,
        }
    }

    pub fn add_sector_listener(&mut self, listener: Box<dyn Listener<SectorsRisk>>) {
        self.sector_listeners.push(listener);
    }

    /// A position changed: set the bond's risk quantity to the position's
    /// absolute aggregate, fan the per-bond update, then recompute and fan
    /// the sector triple.
    pub fn add_position(&mut self, product_id: &str, aggregate_quantity: i64) {
        let entry = self
            .cache
            .get_mut(&product_id.to_string())
            .unwrap_or_else(|| panic!("RiskService: no PV01 entry for {product_id:?}"));
        entry.quantity = aggregate_quantity.abs();
        let updated = entry.clone();
        fan_update(&mut self.bond_listeners, &updated);

        self.recompute_sectors();
    }

    /// Overwrite a bond's per-unit PV01 and re-fan the per-bond update.
    pub fn update_pv01(&mut self, product_id: &str, new_pv01_per_unit: Decimal) {
        let entry = self
            .cache
            .get_mut(&product_id.to_string())
            .unwrap_or_else(|| panic!("RiskService: no PV01 entry for {product_id:?}"));
        entry.pv01_per_unit = new_pv01_per_unit;
        let updated = entry.clone();
        fan_update(&mut self.bond_listeners, &updated);
    }

    /// Quantity-weighted PV01 for one sector, computed fresh from the
    /// current cache contents.
    pub fn bucketed_risk(&self, sector: &BucketedSector) -> SectorRisk {
        let mut weighted_sum = Decimal::ZERO;
        let mut total_quantity: i64 = 0;
        for product_id in &sector.product_ids {
            let pv01 = self.cache.get(product_id);
            weighted_sum += Decimal::from(pv01.quantity) * pv01.pv01_per_unit;
            total_quantity += pv01.quantity;
        }
        let pv01 = if total_quantity > 0 {
            weighted_sum / Decimal::from(total_quantity)
        } else {
            Decimal::ZERO
        };
        SectorRisk::new(sector.name.clone(), pv01, total_quantity)
    }

    fn recompute_sectors(&mut self) {
        let risk = SectorsRisk::new(
            self.bucketed_risk(&self.front_end),
            self.bucketed_risk(&self.belly),
            self.bucketed_risk(&self.long_end),
        );
        fan_update(&mut self.sector_listeners, &risk);
    }
}

impl Service<String, Pv01> for RiskService {
    fn get_data(&self, key: &String) -> &Pv01 {
        self.cache.get(key)
    }

    fn on_message(&mut self, _value: Pv01) {
        // PV01 values are only ever produced by add_position/update_pv01;
        // nothing feeds this service a value directly.
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<Pv01>>) {
        self.bond_listeners.push(listener);
    }

    fn listeners(&self) -> &[Box<dyn Listener<Pv01>>] {
        &self.bond_listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn service() -> RiskService {
        let table = vec![("A".to_string(), dec!(0.04)), ("B".to_string(), dec!(0.08))];
        let front_end = BucketedSector::new("front-end".to_string(), vec!["A".to_string(), "B".to_string()]);
        let belly = BucketedSector::new("belly".to_string(), vec![]);
        let long_end = BucketedSector::new("long-end".to_string(), vec![]);
        RiskService::new(table, front_end, belly, long_end)
    }

    #[test]
    fn add_position_sets_absolute_quantity() {
        let mut risk = service();
        risk.add_position("A", -1_000_000);
        assert_eq!(risk.get_data(&"A".to_string()).quantity, 1_000_000);
    }

    #[test]
    fn bucketed_risk_is_quantity_weighted_average() {
        let mut risk = service();
        risk.add_position("A", 1_000_000);
        risk.add_position("B", 3_000_000);
        let sector = BucketedSector::new("front-end".to_string(), vec!["A".to_string(), "B".to_string()]);
        let bucketed = risk.bucketed_risk(&sector);
        // (1M*0.04 + 3M*0.08) / 4M = 0.07
        assert_eq!(bucketed.pv01, dec!(0.07));
    }

    #[test]
    fn bucketed_risk_is_zero_when_no_quantity() {
        let risk = service();
        let sector = BucketedSector::new("front-end".to_string(), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(risk.bucketed_risk(&sector).pv01, Decimal::ZERO);
    }

    #[test]
    fn update_pv01_overwrites_per_unit_value() {
        let mut risk = service();
        risk.update_pv01("A", dec!(0.05));
        assert_eq!(risk.get_data(&"A".to_string()).pv01_per_unit, dec!(0.05));
    }

    #[test]
    fn add_position_emits_one_sector_triple_covering_all_three_buckets() {
        use std::cell::RefCell;
        use std::rc::Rc;
        use trsy_core::Listener;

        struct RecordingListener(Rc<RefCell<Vec<SectorsRisk>>>);
        impl Listener<SectorsRisk> for RecordingListener {
            fn process_update(&mut self, value: &SectorsRisk) {
                self.0.borrow_mut().push(value.clone());
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut risk = service();
        risk.add_sector_listener(Box::new(RecordingListener(seen.clone())));
        risk.add_position("A", 1_000_000);

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].front_end.quantity, 1_000_000);
    }
}
