use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use derive_more::Constructor;
use rust_decimal::Decimal;
use trsy_core::{Connector, Listener};
use trsy_risk::{Pv01, SectorsRisk};

use crate::sink::HistoricalSink;

/// A combined per-bond-PV01 + sector-risk row, the join product of the
/// risk service's two independent event streams.
#[derive(Debug, Clone, Constructor)]
pub struct RiskRecord {
    pub product_id: String,
    pub quantity: i64,
    pub front_end_pv01: Decimal,
    pub belly_pv01: Decimal,
    pub long_end_pv01: Decimal,
}

/// Appends `key, CUSIP, |quantity|, frontEndPV01, bellyPV01, longEndPV01`
/// to `Output/Historical/risk.txt`.
#[derive(Debug)]
pub struct RiskHistoricalConnector {
    path: PathBuf,
}

impl RiskHistoricalConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Connector<(String, RiskRecord)> for RiskHistoricalConnector {
    fn publish(&mut self, value: &(String, RiskRecord)) -> std::io::Result<()> {
        let (key, record) = value;
        let line = format!(
            "{},{},{},{},{},{}\n",
            key, record.product_id, record.quantity, record.front_end_pv01, record.belly_pv01, record.long_end_pv01,
        );

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

/// Shared state behind the one-shot join: the risk service emits a
/// per-bond [`Pv01`] update immediately followed by a [`SectorsRisk`]
/// triple for the same position change. A combined row is only emitted
/// once both halves have been seen; the flag resets on consumption so a
/// sector update that wasn't preceded by a fresh bond update produces
/// nothing.
#[derive(Debug, Default)]
struct JoinState {
    last_bond_pv01: Option<Pv01>,
    bond_pv01_pending: bool,
}

/// Registered on the risk service's bond-level listener list; records the
/// latest per-bond PV01 and arms the join.
#[derive(Debug, Clone)]
pub struct Pv01JoinListener {
    state: Rc<RefCell<JoinState>>,
}

impl Listener<Pv01> for Pv01JoinListener {
    fn process_update(&mut self, value: &Pv01) {
        let mut state = self.state.borrow_mut();
        state.last_bond_pv01 = Some(value.clone());
        state.bond_pv01_pending = true;
    }
}

/// Registered on the risk service's sector-level listener list; on each
/// sector-risk triple, consumes a pending bond PV01 (if any) and persists
/// the combined [`RiskRecord`].
#[derive(Debug)]
pub struct SectorsRiskJoinListener<C> {
    state: Rc<RefCell<JoinState>>,
    sink: HistoricalSink<RiskRecord, C>,
}

impl<C: Connector<(String, RiskRecord)>> SectorsRiskJoinListener<C> {
    /// Builds the paired [`Pv01JoinListener`]/[`SectorsRiskJoinListener`],
    /// sharing one join state — register the first on the risk service's
    /// bond listeners and the second on its sector listeners.
    pub fn paired(connector: C) -> (Pv01JoinListener, Self) {
        let state = Rc::new(RefCell::new(JoinState::default()));
        (
            Pv01JoinListener { state: state.clone() },
            Self {
                state,
                sink: HistoricalSink::new(connector),
            },
        )
    }
}

impl<C: Connector<(String, RiskRecord)>> Listener<SectorsRisk> for SectorsRiskJoinListener<C> {
    fn process_update(&mut self, sectors: &SectorsRisk) {
        let bond = {
            let mut state = self.state.borrow_mut();
            if !state.bond_pv01_pending {
                return;
            }
            state.bond_pv01_pending = false;
            state
                .last_bond_pv01
                .clone()
                .expect("join flag armed without a recorded bond PV01")
        };

        let record = RiskRecord::new(
            bond.product_id,
            bond.quantity,
            sectors.front_end.pv01,
            sectors.belly.pv01,
            sectors.long_end.pv01,
        );
        if let Err(err) = self.sink.persist(record) {
            panic!("risk historical sink write failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;
    use trsy_risk::SectorRisk;

    #[test]
    fn a_sector_update_with_no_preceding_bond_update_emits_nothing() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let (_bond_listener, mut sector_listener) = SectorsRiskJoinListener::paired(RiskHistoricalConnector::new(file.path()));

        let sectors = SectorsRisk::new(
            SectorRisk::new("front-end".to_string(), dec!(0.04), 1_000_000),
            SectorRisk::new("belly".to_string(), dec!(0), 0),
            SectorRisk::new("long-end".to_string(), dec!(0), 0),
        );
        sector_listener.process_update(&sectors);

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
    }

    #[test]
    fn a_bond_update_followed_by_a_sector_update_emits_one_combined_row() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let (mut bond_listener, mut sector_listener) = SectorsRiskJoinListener::paired(RiskHistoricalConnector::new(file.path()));

        bond_listener.process_update(&Pv01::new("912828M80".to_string(), dec!(0.04), 1_000_000));
        let sectors = SectorsRisk::new(
            SectorRisk::new("front-end".to_string(), dec!(0.04), 1_000_000),
            SectorRisk::new("belly".to_string(), dec!(0), 0),
            SectorRisk::new("long-end".to_string(), dec!(0), 0),
        );
        sector_listener.process_update(&sectors);
        sector_listener.process_update(&sectors);

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert_eq!(contents, "1,912828M80,1000000,0.04,0,0\n");
    }
}
