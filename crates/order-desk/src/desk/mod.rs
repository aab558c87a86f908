//! # Order Desk
//!
//! The actor that owns the [`Catalog`] and the [`Ledger`].
//!
//! ## Overview
//!
//! Both structures live inside one [`OrderDesk`] value, and that value lives
//! inside one [`StateActor`](actor_framework::StateActor) task. Requests are
//! handled one at a time, so:
//!
//! - an order placement (validate, price, decrement, insert) is a single
//!   critical section over catalog *and* ledger;
//! - two placements never interleave their decrements;
//! - a catalog or order listing never sees a half-applied placement;
//! - a status update is a plain read-modify-write of one ledger entry.
//!
//! ## Structure
//!
//! - [`transaction`] - the placement transaction
//! - [`status`] - status transitions
//! - [`error`] - [`OrderError`]
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::StateActor;
//! use order_desk::catalog::Catalog;
//! use order_desk::clients::OrderDeskClient;
//! use order_desk::desk::OrderDesk;
//! use order_desk::model::LineRequest;
//! use order_desk::pricing::PricingEngine;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let desk = OrderDesk::new(Catalog::seeded()?, PricingEngine::default());
//!     let (actor, inner) = StateActor::new(desk, 32);
//!     tokio::spawn(actor.run(()));
//!
//!     let client = OrderDeskClient::new(inner);
//!     let order = client.place_order(vec![LineRequest::new(1, 5)]).await?;
//!     assert_eq!(order.total, 500.0);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod status;
pub mod transaction;

pub use error::*;
pub use transaction::MAX_LINE_QUANTITY;

use crate::catalog::Catalog;
use crate::ledger::Ledger;
use crate::model::{LineRequest, Order, OrderId, OrderStatus, Product};
use crate::pricing::PricingEngine;
use actor_framework::{reply, ActorState, Response};
use async_trait::async_trait;
use tracing::info;

/// Requests understood by the desk.
#[derive(Debug)]
pub enum DeskRequest {
    ListProducts {
        respond_to: Response<Vec<Product>>,
    },
    ListOrders {
        respond_to: Response<Vec<Order>>,
    },
    GetOrder {
        id: OrderId,
        respond_to: Response<Result<Order, OrderError>>,
    },
    PlaceOrder {
        lines: Vec<LineRequest>,
        respond_to: Response<Result<Order, OrderError>>,
    },
    UpdateStatus {
        id: OrderId,
        status: OrderStatus,
        respond_to: Response<Result<Order, OrderError>>,
    },
}

/// Catalog, ledger and pricing rule, owned together.
#[derive(Debug, Clone)]
pub struct OrderDesk {
    catalog: Catalog,
    ledger: Ledger,
    pricing: PricingEngine,
}

impl OrderDesk {
    pub fn new(catalog: Catalog, pricing: PricingEngine) -> Self {
        Self {
            catalog,
            ledger: Ledger::new(),
            pricing,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.ledger
            .get(id)
            .cloned()
            .ok_or(OrderError::OrderNotFound(id))
    }
}

#[async_trait]
impl ActorState for OrderDesk {
    type Request = DeskRequest;
    type Context = ();

    async fn on_start(&mut self, _ctx: &()) {
        info!(
            products = self.catalog.len(),
            discount = ?self.pricing.mode(),
            "Catalog loaded"
        );
    }

    async fn handle(&mut self, request: DeskRequest, _ctx: &()) {
        match request {
            DeskRequest::ListProducts { respond_to } => reply(respond_to, self.catalog.list()),
            DeskRequest::ListOrders { respond_to } => reply(respond_to, self.ledger.list()),
            DeskRequest::GetOrder { id, respond_to } => reply(respond_to, self.get_order(id)),
            DeskRequest::PlaceOrder { lines, respond_to } => {
                let result = self.place_order(&lines);
                reply(respond_to, result);
            }
            DeskRequest::UpdateStatus {
                id,
                status,
                respond_to,
            } => {
                let result = self.update_status(id, status);
                reply(respond_to, result);
            }
        }
    }

    async fn on_stop(&mut self, _ctx: &()) {
        info!(orders = self.ledger.len(), "Ledger closed");
    }
}
