//! # Framework Errors
//!
//! Errors raised by the plumbing between a [`StateClient`](crate::StateClient)
//! and its [`StateActor`](crate::StateActor). Domain failures never travel
//! through this type; they are part of each request's own response payload.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's mailbox is closed; the actor task has stopped.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor accepted the request but dropped the response channel.
    #[error("Actor dropped response channel")]
    ActorDropped,
}
