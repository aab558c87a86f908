//! # Actor Framework
//!
//! Building blocks for single-owner actors on Tokio: a piece of state lives
//! inside one task, and everything else talks to it through cloneable
//! clients over a bounded channel.
//!
//! ## Why single-owner state?
//!
//! - **No locks**: the actor drains its mailbox one request at a time, so the
//!   state is never shared.
//! - **Atomic by construction**: a request handler that touches several
//!   structures runs to completion before the next request is looked at.
//! - **Clear ownership**: the task that owns the data is the only code path
//!   that mutates it.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`ActorState`]) - your data and request handling
//! 2. **Runtime Layer** ([`StateActor`]) - mailbox draining and lifecycle hooks
//! 3. **Interface Layer** ([`StateClient`], [`ActorClient`]) - typed request/reply
//!
//! ## Context Injection Pattern
//!
//! Dependencies are passed to [`StateActor::run`] rather than to the
//! constructor, so actors that need each other's clients can all be created
//! first and wired afterwards.
//!
//! ## Shutdown
//!
//! Dropping every client closes the mailbox. The actor finishes the requests
//! already queued, runs [`ActorState::on_stop`], and returns its state from
//! `run`.
//!
//! ## Testing
//!
//! See the [`mock`] module for clients that answer from a script instead of a
//! running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{reply, Response};
pub use state::ActorState;
