use crate::catalog::{Catalog, SeedError};
use crate::clients::OrderDeskClient;
use crate::config::DeskConfig;
use crate::desk::OrderDesk;
use crate::pricing::PricingEngine;
use actor_framework::StateActor;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Seed catalog rejected: {0}")]
    Seed(#[from] SeedError),

    #[error("Desk task failed: {0}")]
    TaskFailed(#[from] JoinError),
}

/// Owns the running order desk.
///
/// `OrderSystem` is responsible for:
/// - **Startup**: spawning the desk actor with its catalog and pricing rule
/// - **Access**: handing out [`OrderDeskClient`]s
/// - **Shutdown**: closing the mailbox and collecting the final desk state
///
/// # Example
///
/// ```rust
/// use order_desk::config::DeskConfig;
/// use order_desk::lifecycle::OrderSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::from_config(&DeskConfig::default())?;
///     let products = system.desk_client.list_products().await?;
///     assert_eq!(products.len(), 6);
///
///     let desk = system.shutdown().await?;
///     assert!(desk.ledger().is_empty());
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    /// Client for the desk actor. Clone it freely.
    pub desk_client: OrderDeskClient,

    handle: JoinHandle<OrderDesk>,
}

impl OrderSystem {
    /// Spawns `desk` with a mailbox of `mailbox` requests.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start(desk: OrderDesk, mailbox: usize) -> Self {
        let (actor, inner) = StateActor::new(desk, mailbox);
        let handle = tokio::spawn(actor.run(()));

        Self {
            desk_client: OrderDeskClient::new(inner),
            handle,
        }
    }

    /// Starts a desk over the seed catalog with the configured pricing rule.
    pub fn from_config(config: &DeskConfig) -> Result<Self, LifecycleError> {
        let desk = OrderDesk::new(Catalog::seeded()?, PricingEngine::new(config.discount_mode));
        Ok(Self::start(desk, config.mailbox))
    }

    /// Drops the system's client and waits for the desk to drain its mailbox.
    ///
    /// Clones of the client handed out earlier keep the desk alive, so drop
    /// them first. Returns the desk as it stood when it stopped.
    pub async fn shutdown(self) -> Result<OrderDesk, LifecycleError> {
        info!("Shutting down order desk");
        drop(self.desk_client);

        match self.handle.await {
            Ok(desk) => {
                info!(orders = desk.ledger().len(), "Shutdown complete");
                Ok(desk)
            }
            Err(e) => {
                error!(error = %e, "Desk task failed");
                Err(e.into())
            }
        }
    }
}
