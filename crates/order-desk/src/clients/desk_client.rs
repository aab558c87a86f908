use crate::desk::{DeskRequest, OrderDesk, OrderError};
use crate::model::{LineRequest, Order, OrderId, OrderStatus, Product};
use actor_framework::{ActorClient, StateClient};
use tracing::{debug, instrument};

/// Client for interacting with the order desk actor.
///
/// Cheap to clone; every clone feeds the same mailbox.
#[derive(Clone)]
pub struct OrderDeskClient {
    inner: StateClient<OrderDesk>,
}

impl OrderDeskClient {
    pub fn new(inner: StateClient<OrderDesk>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, OrderError> {
        debug!("Sending request");
        self.inner
            .request(|respond_to| DeskRequest::ListProducts { respond_to })
            .await
            .map_err(OrderError::from)
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .request(|respond_to| DeskRequest::ListOrders { respond_to })
            .await
            .map_err(OrderError::from)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.call(move |respond_to| DeskRequest::GetOrder { id, respond_to })
            .await
    }

    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn place_order(&self, lines: Vec<LineRequest>) -> Result<Order, OrderError> {
        debug!(?lines, "Sending request");
        self.call(move |respond_to| DeskRequest::PlaceOrder { lines, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.call(move |respond_to| DeskRequest::UpdateStatus {
            id,
            status,
            respond_to,
        })
        .await
    }
}

impl ActorClient<OrderDesk> for OrderDeskClient {
    type Error = OrderError;

    fn inner(&self) -> &StateClient<OrderDesk> {
        &self.inner
    }
}
