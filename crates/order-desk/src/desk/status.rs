//! Status transitions.
//!
//! Any label may follow any other, the empty one included. `Dispatched`
//! additionally stamps the dispatch time, once.

use super::{OrderDesk, OrderError};
use crate::model::{Order, OrderId, OrderStatus};
use chrono::Utc;
use tracing::{info, warn};

impl OrderDesk {
    pub fn update_status(&mut self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let Some(order) = self.ledger.get_mut(id) else {
            warn!(order_id = %id, "Status update for unknown order");
            return Err(OrderError::OrderNotFound(id));
        };

        let previous = order.status.clone();
        order.apply_status(status, Utc::now());
        info!(order_id = %id, from = %previous, to = %order.status, "Status updated");
        Ok(order.clone())
    }
}
