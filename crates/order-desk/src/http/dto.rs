use crate::model::{LineRequest, OrderId};
use serde::Deserialize;

/// Body of `POST /placeOrder`.
///
/// Lines may carry extra product fields (name, price, ...); only `id` and
/// `quantity` are read.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub products: Vec<LineRequest>,
}

/// Body of `POST /updateOrderStatus`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub order_id: OrderId,
    pub order_status: String,
}
