use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trsy_product::PricingSide;

use crate::order_type::OrderType;

/// An order produced by algo-execution and routed to a venue by
/// [`crate::service::ExecutionService`].
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct ExecutionOrder {
    pub product_id: String,
    pub side: PricingSide,
    pub order_id: String,
    pub order_type: OrderType,
    pub price: Decimal,
    pub visible_quantity: i64,
    pub hidden_quantity: i64,
    pub parent_order_id: String,
    pub is_child_order: bool,
}
