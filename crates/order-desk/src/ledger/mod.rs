//! # Order Ledger
//!
//! Every order created during the process lifetime, keyed by the identifier
//! the ledger assigns on insert.
//!
//! Identifiers come from a counter that only moves forward. It does not
//! depend on how many orders are stored, so no identifier is ever handed out
//! twice.

use crate::model::{Order, OrderDraft, OrderId};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Ledger {
    orders: BTreeMap<OrderId, Order>,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            orders: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Records a new order with status `Placed` and returns its identifier.
    pub fn insert(&mut self, draft: OrderDraft) -> OrderId {
        let id = OrderId(self.next_id);
        self.next_id += 1;
        self.orders.insert(id, Order::placed(id, draft));
        id
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    /// All orders in creation order.
    pub fn list(&self) -> Vec<Order> {
        self.orders.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;

    fn draft(total: f64) -> OrderDraft {
        OrderDraft {
            lines: Vec::new(),
            total,
        }
    }

    #[test]
    fn assigns_increasing_ids_starting_at_one() {
        let mut ledger = Ledger::new();

        let first = ledger.insert(draft(1.0));
        let second = ledger.insert(draft(2.0));

        assert_eq!(first, OrderId(1));
        assert_eq!(second, OrderId(2));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn inserted_orders_start_placed() {
        let mut ledger = Ledger::new();
        let id = ledger.insert(draft(42.0));

        let order = ledger.get(id).unwrap();
        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.total, 42.0);
        assert_eq!(order.dispatched_at, None);
        assert!(ledger.get(OrderId(99)).is_none());
    }

    #[test]
    fn list_follows_creation_order() {
        let mut ledger = Ledger::new();
        for total in [3.0, 1.0, 2.0] {
            ledger.insert(draft(total));
        }

        let totals: Vec<f64> = ledger.list().iter().map(|o| o.total).collect();
        assert_eq!(totals, vec![3.0, 1.0, 2.0]);
    }
}
