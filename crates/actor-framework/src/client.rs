//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::error::FrameworkError;
use crate::message::Response;
use crate::state::ActorState;
use tokio::sync::{mpsc, oneshot};

/// ## StateClient
///
/// The `StateClient<S>` is the sending half of a [`StateActor<S>`](crate::StateActor).
/// It builds a request around a fresh oneshot channel, queues it in the
/// actor's mailbox and awaits the reply.
///
/// * **Cloneable**: holds only a sender, so cloning is inexpensive.
/// * **Shutdown signal**: the actor stops once every clone has been dropped.
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<S::Request>,
}

impl<S: ActorState> Clone for StateClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<S::Request>) -> Self {
        Self { sender }
    }

    /// Sends a request built by `make` and waits for its reply.
    ///
    /// `make` receives the reply channel and must embed it in the request.
    pub async fn request<R>(
        &self,
        make: impl FnOnce(Response<R>) -> S::Request,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Returns `true` once the actor has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
