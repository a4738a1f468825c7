use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of the market a quote or order sits on. Distinct from the trade
/// [`TradeSide`] (`BUY`/`SELL`) — a bid quote can be crossed by either a buy
/// or a sell trade, so conflating the two enums would lose information the
/// original source kept as separate `PricingSide`/`Side` types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingSide {
    Bid,
    Offer,
}

/// Side of a booked trade or a client inquiry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// The side a reversing trade takes (see `ProcessRemove` semantics).
    pub fn flipped(self) -> Self {
        match self {
            TradeSide::Buy => TradeSide::Sell,
            TradeSide::Sell => TradeSide::Buy,
        }
    }

    /// Signed multiplier applied to a trade quantity when accumulating a
    /// position: `+1` for `BUY`, `-1` for `SELL`.
    pub fn signum(self) -> i64 {
        match self {
            TradeSide::Buy => 1,
            TradeSide::Sell => -1,
        }
    }
}

/// A price consisting of a mid and a bid/offer spread around it.
///
/// Invariant: `spread >= 0`; `bid = mid - spread/2`, `offer = mid +
/// spread/2`.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct Price {
    pub product_id: String,
    pub mid: Decimal,
    pub spread: Decimal,
}

impl Price {
    pub fn bid(&self) -> Decimal {
        self.mid - self.spread / Decimal::from(2)
    }

    pub fn offer(&self) -> Decimal {
        self.mid + self.spread / Decimal::from(2)
    }
}
