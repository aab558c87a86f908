//! # Messages
//!
//! Every request carries its own one-shot reply channel. The request enum is
//! defined by the [`ActorState`](crate::ActorState) implementation, so the
//! compiler ties each variant to the exact type it answers with.

use tokio::sync::oneshot;

/// Reply half handed to the actor inside a request.
pub type Response<T> = oneshot::Sender<T>;

/// Sends `value` back to the caller.
///
/// A caller that gave up waiting has already dropped the receiver; that is
/// not an error for the actor, so the send result is reported and discarded.
pub fn reply<T>(respond_to: Response<T>, value: T) {
    if respond_to.send(value).is_err() {
        tracing::debug!("Caller dropped before the reply was sent");
    }
}
