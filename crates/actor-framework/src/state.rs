//! # ActorState Trait
//!
//! `ActorState` is the contract for anything owned by a [`StateActor`](crate::StateActor).
//! The implementor owns its data outright and receives requests one at a time,
//! so mutations never need a lock. A multi-step operation that runs inside a
//! single [`handle`](ActorState::handle) call is a critical section by
//! construction: no other request can observe its intermediate state.
//!
//! # Associated Types
//!
//! - `Request`: the message enum. Each variant embeds a
//!   [`Response`](crate::Response) for its reply.
//! - `Context`: dependencies injected when the actor starts running
//!   (late binding). Use `()` if there are none.

use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait ActorState: Send + 'static {
    /// The request enum accepted by this actor.
    type Request: Send + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// Short human-readable name used in log fields.
    ///
    /// Defaults to the last path segment of the type name.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown")
    }

    /// Called once before the first request is processed.
    async fn on_start(&mut self, _ctx: &Self::Context) {}

    /// Process a single request. Replies go through the request's own
    /// response channel.
    async fn handle(&mut self, request: Self::Request, ctx: &Self::Context);

    /// Called once after the mailbox closes and every queued request has
    /// been handled.
    async fn on_stop(&mut self, _ctx: &Self::Context) {}
}
