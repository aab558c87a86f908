//! # ActorClient Trait
//!
//! Provides a common interface for domain-specific clients built on top of a
//! generic [`StateClient`]. The provided [`call`](ActorClient::call) method
//! collapses transport failures and domain failures into one error type.
use crate::{ActorState, FrameworkError, Response, StateClient};
use async_trait::async_trait;

/// Trait for domain clients whose requests answer with `Result<R, Self::Error>`.
///
/// # Example
///
/// ```rust
/// use actor_framework::{reply, ActorClient, ActorState, FrameworkError, Response, StateClient};
/// use async_trait::async_trait;
///
/// struct Vault { balance: u64 }
///
/// #[derive(Debug, thiserror::Error)]
/// enum VaultError {
///     #[error("insufficient funds")]
///     Insufficient,
///     #[error(transparent)]
///     Framework(#[from] FrameworkError),
/// }
///
/// #[derive(Debug)]
/// enum VaultRequest {
///     Withdraw { amount: u64, respond_to: Response<Result<u64, VaultError>> },
/// }
///
/// #[async_trait]
/// impl ActorState for Vault {
///     type Request = VaultRequest;
///     type Context = ();
///     async fn handle(&mut self, request: VaultRequest, _: &()) {
///         let VaultRequest::Withdraw { amount, respond_to } = request;
///         let result = match self.balance.checked_sub(amount) {
///             Some(left) => { self.balance = left; Ok(left) }
///             None => Err(VaultError::Insufficient),
///         };
///         reply(respond_to, result);
///     }
/// }
///
/// struct VaultClient { inner: StateClient<Vault> }
///
/// impl ActorClient<Vault> for VaultClient {
///     type Error = VaultError;
///     fn inner(&self) -> &StateClient<Vault> { &self.inner }
/// }
///
/// async fn usage(client: VaultClient) -> Result<u64, VaultError> {
///     client.call(|respond_to| VaultRequest::Withdraw { amount: 5, respond_to }).await
/// }
/// ```
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The domain error type. Must absorb framework failures.
    type Error: From<FrameworkError> + Send + 'static;

    /// Access the inner generic client.
    fn inner(&self) -> &StateClient<S>;

    /// Sends a request whose reply is a domain `Result` and flattens it.
    async fn call<R, F>(&self, make: F) -> Result<R, Self::Error>
    where
        R: Send + 'static,
        F: FnOnce(Response<Result<R, Self::Error>>) -> S::Request + Send + 'static,
    {
        match self.inner().request(make).await {
            Ok(result) => result,
            Err(e) => Err(Self::Error::from(e)),
        }
    }
}
