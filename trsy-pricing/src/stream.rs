use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trsy_product::PricingSide;

/// One side of a two-way price stream.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct PriceStreamOrder {
    pub price: Decimal,
    pub visible_quantity: i64,
    pub hidden_quantity: i64,
    pub side: PricingSide,
}

/// A two-sided streamable market for a product.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct PriceStream {
    pub product_id: String,
    pub bid_order: PriceStreamOrder,
    pub offer_order: PriceStreamOrder,
}
