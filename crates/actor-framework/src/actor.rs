//! # Generic Actor Server
//!
//! This module defines the `StateActor`, the server half of the framework. It
//! owns a piece of state and drains its mailbox sequentially, guaranteeing
//! exclusive access to that state without any locking.

use crate::client::StateClient;
use crate::state::ActorState;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that owns an [`ActorState`] and serves its requests.
///
/// # Concurrency Model
/// Any number of cloned [`StateClient`]s may send requests concurrently. They
/// queue in a bounded channel and the actor processes them one at a time, so
/// each call to [`ActorState::handle`] observes the state left by the previous
/// one and nothing else.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StateActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{reply, ActorState, Response, StateActor};
/// use async_trait::async_trait;
///
/// #[derive(Default)]
/// struct Tally { total: u64 }
///
/// #[derive(Debug)]
/// enum TallyRequest {
///     Add { amount: u64, respond_to: Response<u64> },
/// }
///
/// #[async_trait]
/// impl ActorState for Tally {
///     type Request = TallyRequest;
///     type Context = ();
///
///     async fn handle(&mut self, request: TallyRequest, _: &()) {
///         match request {
///             TallyRequest::Add { amount, respond_to } => {
///                 self.total += amount;
///                 reply(respond_to, self.total);
///             }
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(Tally::default(), 10);
///     let handle = tokio::spawn(actor.run(()));
///
///     let total = client
///         .request(|respond_to| TallyRequest::Add { amount: 3, respond_to })
///         .await
///         .unwrap();
///     assert_eq!(total, 3);
///
///     drop(client);
///     let tally = handle.await.unwrap();
///     assert_eq!(tally.total, 3);
/// }
/// ```
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<S::Request>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state` and its associated client.
    ///
    /// `buffer_size` is the mailbox capacity. When it is full, client calls
    /// wait until there is space.
    pub fn new(state: S, buffer_size: usize) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, StateClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Requests still queued when the last client goes away are handled
    /// before the loop exits. The final state is returned so the owner can
    /// inspect it after shutdown.
    pub async fn run(mut self, context: S::Context) -> S {
        let actor = S::name();
        info!(actor, "Actor started");
        self.state.on_start(&context).await;

        let mut handled: u64 = 0;
        while let Some(request) = self.receiver.recv().await {
            debug!(actor, ?request, "Request");
            self.state.handle(request, &context).await;
            handled += 1;
        }

        self.state.on_stop(&context).await;
        info!(actor, handled, "Shutdown");
        self.state
    }
}
