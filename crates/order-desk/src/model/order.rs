//! Orders as recorded in the ledger.
//!
//! An [`Order`] is created exactly once by the desk's placement transaction
//! and afterwards only its status (and dispatch timestamp) changes.

use crate::model::{Product, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A line as submitted by the caller: which product, how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRequest {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub quantity: u32,
}

impl LineRequest {
    pub fn new(product_id: u32, quantity: u32) -> Self {
        Self {
            product_id: ProductId(product_id),
            quantity,
        }
    }
}

/// A committed line: the product as it stood right after this line's
/// decrement, plus the quantity taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

/// Order lifecycle label.
///
/// The set is open: any label a caller sends is kept verbatim.
/// `Dispatched` is the only one with behaviour attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Placed,
    Dispatched,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Dispatched => "Dispatched",
            OrderStatus::Other(label) => label,
        }
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self, OrderStatus::Dispatched)
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Placed" => OrderStatus::Placed,
            "Dispatched" => OrderStatus::Dispatched,
            _ => OrderStatus::Other(label),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(label: &str) -> Self {
        OrderStatus::from(label.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the ledger needs to record a new order, minus the ID it assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub lines: Vec<OrderLine>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "order_id")]
    pub id: OrderId,
    #[serde(rename = "products")]
    pub lines: Vec<OrderLine>,
    /// Computed once at placement and never recomputed.
    #[serde(rename = "order_value")]
    pub total: f64,
    #[serde(
        rename = "dispatch_date",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dispatched_at: Option<DateTime<Utc>>,
    #[serde(rename = "order_status")]
    pub status: OrderStatus,
}

impl Order {
    /// Creates a freshly placed order from a draft.
    pub fn placed(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            lines: draft.lines,
            total: draft.total,
            dispatched_at: None,
            status: OrderStatus::Placed,
        }
    }

    /// Overwrites the status.
    ///
    /// Moving to `Dispatched` stamps `now` as the dispatch time unless the
    /// order already carries one; the first stamp is kept for good.
    pub fn apply_status(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        if status.is_dispatched() && self.dispatched_at.is_none() {
            self.dispatched_at = Some(now);
        }
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn order() -> Order {
        Order::placed(
            OrderId(7),
            OrderDraft {
                lines: vec![OrderLine {
                    product: Product::new(1, "Product1", "Premium", 100.0, 5),
                    quantity: 5,
                }],
                total: 500.0,
            },
        )
    }

    #[test]
    fn status_labels_round_trip_through_strings() {
        assert_eq!(OrderStatus::from("Placed"), OrderStatus::Placed);
        assert_eq!(OrderStatus::from("Dispatched"), OrderStatus::Dispatched);
        assert_eq!(
            OrderStatus::from("Packed"),
            OrderStatus::Other("Packed".into())
        );
        assert_eq!(String::from(OrderStatus::Other("Packed".into())), "Packed");
        // Labels are case-sensitive
        assert!(!OrderStatus::from("dispatched").is_dispatched());
    }

    #[test]
    fn dispatch_stamps_once() {
        let mut order = order();
        let first = Utc::now();
        let later = first + Duration::minutes(5);

        order.apply_status(OrderStatus::from("Packed"), first);
        assert_eq!(order.dispatched_at, None);

        order.apply_status(OrderStatus::Dispatched, first);
        assert_eq!(order.dispatched_at, Some(first));

        order.apply_status(OrderStatus::from("Returned"), later);
        order.apply_status(OrderStatus::Dispatched, later);
        assert_eq!(order.dispatched_at, Some(first));
        assert_eq!(order.status, OrderStatus::Dispatched);
    }

    #[test]
    fn serializes_with_public_field_names() {
        let json = serde_json::to_value(order()).unwrap();

        assert_eq!(json["order_id"], 7);
        assert_eq!(json["order_value"], 500.0);
        assert_eq!(json["order_status"], "Placed");
        assert!(json.get("dispatch_date").is_none());
        assert_eq!(json["products"][0]["id"], 1);
        assert_eq!(json["products"][0]["availability"], 5);
        assert_eq!(json["products"][0]["quantity"], 5);
    }
}
