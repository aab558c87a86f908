//! # Mock Framework & Testing Guide
//!
//! Utilities for testing code that talks to an actor without spawning the
//! real actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (scripted replies) | Real state |
//! | **Use Case** | Logic *around* the client (routing, error mapping) | The actor itself or the full system |
//! | **Error Injection** | Easy (reply with any error, or drop the request) | Requires specific state |
//!
//! ## Two styles
//!
//! - **Receiver style**: [`create_mock_client`] returns a client plus the raw
//!   mailbox. The test pulls requests with [`expect_request`] and answers
//!   them by hand.
//! - **Scripted style**: [`MockClient`] answers each incoming request with
//!   the next queued responder, and [`MockClient::verify`] checks that every
//!   responder was consumed and no request arrived unannounced.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{reply, ActorState, Response};
//! use async_trait::async_trait;
//!
//! struct Clock;
//!
//! #[derive(Debug)]
//! enum ClockRequest {
//!     Now { respond_to: Response<u64> },
//! }
//!
//! #[async_trait]
//! impl ActorState for Clock {
//!     type Request = ClockRequest;
//!     type Context = ();
//!     async fn handle(&mut self, _: ClockRequest, _: &()) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockClient::<Clock>::new();
//!     mock.expect(|request| {
//!         let ClockRequest::Now { respond_to } = request;
//!         reply(respond_to, 42);
//!     });
//!
//!     let now = mock
//!         .client()
//!         .request(|respond_to| ClockRequest::Now { respond_to })
//!         .await
//!         .unwrap();
//!     assert_eq!(now, 42);
//!     mock.verify();
//! }
//! ```

use crate::{ActorState, StateClient};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

type Responder<S> = Box<dyn FnOnce(<S as ActorState>::Request) + Send>;

/// Shared bookkeeping between the mock and its background task.
struct Script<S: ActorState> {
    responders: VecDeque<Responder<S>>,
    unexpected: Vec<String>,
}

/// A mock client that answers requests from a queue of responders.
///
/// A request that arrives with no responder queued is recorded and dropped,
/// so the caller observes [`FrameworkError::ActorDropped`](crate::FrameworkError::ActorDropped);
/// [`verify`](MockClient::verify) then fails the test.
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    script: Arc<Mutex<Script<S>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> MockClient<S> {
    /// Creates a new mock with no expectations. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<S::Request>(100);
        let script = Arc::new(Mutex::new(Script {
            responders: VecDeque::new(),
            unexpected: Vec::new(),
        }));
        let task_script = Arc::clone(&script);

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let responder = {
                    let mut script = task_script.lock().unwrap_or_else(PoisonError::into_inner);
                    match script.responders.pop_front() {
                        Some(responder) => Some(responder),
                        None => {
                            script.unexpected.push(format!("{request:?}"));
                            None
                        }
                    }
                };
                if let Some(responder) = responder {
                    responder(request);
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Queues a responder for the next incoming request.
    pub fn expect(&self, responder: impl FnOnce(S::Request) + Send + 'static) {
        self.lock().responders.push_back(Box::new(responder));
    }

    /// Panics unless every responder was used and no unexpected request arrived.
    pub fn verify(&self) {
        let script = self.lock();
        if !script.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", script.unexpected);
        }
        if !script.responders.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.responders.len()
            );
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script<S>> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: ActorState> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a client together with the raw mailbox it sends to.
///
/// The test plays the actor: it receives requests with [`expect_request`] and
/// replies through the embedded response channel.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
) -> (StateClient<S>, mpsc::Receiver<S::Request>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Waits for the next request sent to a mock mailbox.
pub async fn expect_request<S: ActorState>(
    receiver: &mut mpsc::Receiver<S::Request>,
) -> Option<S::Request> {
    receiver.recv().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reply, FrameworkError, Response};
    use async_trait::async_trait;

    struct Echo;

    #[derive(Debug)]
    enum EchoRequest {
        Say {
            text: String,
            respond_to: Response<String>,
        },
    }

    #[async_trait]
    impl ActorState for Echo {
        type Request = EchoRequest;
        type Context = ();
        async fn handle(&mut self, _: EchoRequest, _: &()) {}
    }

    #[tokio::test]
    async fn receiver_style_mock_answers_by_hand() {
        let (client, mut receiver) = create_mock_client::<Echo>(4);

        let call = tokio::spawn(async move {
            client
                .request(|respond_to| EchoRequest::Say {
                    text: "ping".into(),
                    respond_to,
                })
                .await
        });

        let EchoRequest::Say { text, respond_to } = expect_request::<Echo>(&mut receiver)
            .await
            .expect("Expected Say request");
        assert_eq!(text, "ping");
        reply(respond_to, "pong".to_string());

        assert_eq!(call.await.unwrap(), Ok("pong".to_string()));
    }

    #[tokio::test]
    async fn unscripted_request_is_dropped_and_reported() {
        let mock = MockClient::<Echo>::new();

        let result = mock
            .client()
            .request(|respond_to| EchoRequest::Say {
                text: "hello".into(),
                respond_to,
            })
            .await;

        assert_eq!(result, Err(FrameworkError::ActorDropped));
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(outcome.is_err());
    }
}
