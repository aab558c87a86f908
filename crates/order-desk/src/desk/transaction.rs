//! The placement transaction.
//!
//! `Received -> Validating -> Pricing -> Committing -> Committed`, with a
//! single exit to `Aborted` that leaves catalog and ledger untouched.

use super::{OrderDesk, OrderError};
use crate::model::{LineRequest, Order, OrderDraft, OrderLine, Product, ProductId};
use std::collections::HashMap;
use tracing::{info, warn};

/// Most units of one product a single line may request.
pub const MAX_LINE_QUANTITY: u32 = 10;

impl OrderDesk {
    /// Places an order, all or nothing.
    ///
    /// Lines are checked in input order. Repeated product IDs are separate
    /// lines that draw on the same shrinking stock, so a later duplicate can
    /// fail where it would have passed alone.
    pub fn place_order(&mut self, requested: &[LineRequest]) -> Result<Order, OrderError> {
        let result = self.try_place(requested);
        match &result {
            Ok(order) => info!(
                order_id = %order.id,
                lines = order.lines.len(),
                total = order.total,
                "Order placed"
            ),
            Err(e) => warn!(error = %e, "Order rejected"),
        }
        result
    }

    fn try_place(&mut self, requested: &[LineRequest]) -> Result<Order, OrderError> {
        let resolved = self.validate(requested)?;
        let total = self
            .pricing
            .total(resolved.iter().map(|(product, quantity)| (product, *quantity)));
        let lines = self.commit(requested)?;

        let id = self.ledger.insert(OrderDraft { lines, total });
        self.get_order(id)
    }

    /// Resolves every line against staged availability without touching the
    /// catalog.
    fn validate(&self, requested: &[LineRequest]) -> Result<Vec<(Product, u32)>, OrderError> {
        if requested.is_empty() {
            return Err(OrderError::MalformedInput(
                "order must contain at least one line".into(),
            ));
        }

        let mut staged: HashMap<ProductId, u32> = HashMap::new();
        let mut resolved = Vec::with_capacity(requested.len());

        for line in requested {
            if line.quantity == 0 {
                return Err(OrderError::MalformedInput(format!(
                    "quantity for {} must be positive",
                    line.product_id
                )));
            }
            let product = self.catalog.get(line.product_id)?;
            let left = staged
                .entry(line.product_id)
                .or_insert(product.available);

            if line.quantity > *left || line.quantity > MAX_LINE_QUANTITY {
                return Err(OrderError::InsufficientStock {
                    product_id: line.product_id,
                    requested: line.quantity,
                    allowed: (*left).min(MAX_LINE_QUANTITY),
                });
            }
            *left -= line.quantity;
            resolved.push((product.clone(), line.quantity));
        }
        Ok(resolved)
    }

    /// Applies every decrement, undoing the ones already made if any fails.
    fn commit(&mut self, requested: &[LineRequest]) -> Result<Vec<OrderLine>, OrderError> {
        let mut lines = Vec::with_capacity(requested.len());
        for line in requested {
            match self.catalog.decrement(line.product_id, line.quantity) {
                Ok(product) => lines.push(OrderLine {
                    product,
                    quantity: line.quantity,
                }),
                Err(e) => {
                    for done in &lines {
                        self.catalog.restore(done.product.id, done.quantity);
                    }
                    return Err(e.into());
                }
            }
        }
        Ok(lines)
    }
}
