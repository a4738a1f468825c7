use derive_more::{Constructor, Display};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trsy_product::TradeSide;

/// State in the two-hop quoting workflow. `Rejected` and `CustomerRejected`
/// are terminal and never observed in the fixed `inquiries.txt` feed, which
/// only ever arrives as `Received`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum InquiryState {
    #[display("RECEIVED")]
    Received,
    #[display("QUOTED")]
    Quoted,
    #[display("DONE")]
    Done,
    #[display("REJECTED")]
    Rejected,
    #[display("CUSTOMER_REJECTED")]
    CustomerRejected,
}

/// A client's request for a price on a product. Identity is `inquiry_id`,
/// not `product_id` — a client may have several outstanding inquiries on
/// the same bond.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct Inquiry {
    pub inquiry_id: String,
    pub product_id: String,
    pub side: TradeSide,
    pub quantity: i64,
    pub price: Decimal,
    pub state: InquiryState,
}
