//! # Order Desk
//!
//! An in-memory order service: a product catalog with live stock, a ledger of
//! placed orders, and a pricing rule with a premium discount.
//!
//! ## Module Tour
//!
//! - **[model]**: [`Product`](model::Product), [`Order`](model::Order) and their identifiers.
//! - **[catalog]** / **[ledger]**: the two stores, free of any locking.
//! - **[pricing]**: order totals and the premium discount.
//! - **[desk]**: the actor owning both stores. Placing an order is one request,
//!   so it is atomic across catalog and ledger.
//! - **[clients]**: [`OrderDeskClient`](clients::OrderDeskClient), the typed way in.
//! - **[lifecycle]**: starting and stopping the desk.
//! - **[http]**: the JSON boundary.
//! - **[config]**: environment configuration.
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning
//! the desk.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod desk;
pub mod http;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod pricing;
