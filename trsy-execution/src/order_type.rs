use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Execution order type. Only `Market` is ever produced by algo-execution
/// in this system; the rest exist because the wire schema names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum OrderType {
    #[display("FOK")]
    Fok,
    #[display("IOC")]
    Ioc,
    #[display("MARKET")]
    Market,
    #[display("LIMIT")]
    Limit,
    #[display("STOP")]
    Stop,
}

/// Execution venue, chosen uniformly at random for every order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Venue {
    #[display("BROKERTEC")]
    Brokertec,
    #[display("ESPEED")]
    Espeed,
    #[display("CME")]
    Cme,
}

impl Venue {
    pub const ALL: [Venue; 3] = [Venue::Brokertec, Venue::Espeed, Venue::Cme];
}
