//! # HTTP boundary
//!
//! JSON over HTTP in front of an [`OrderDeskClient`]. Handlers only translate:
//! every decision is made by the desk.
//!
//! | Route | Method | Returns |
//! |-------|--------|---------|
//! | `/productCatalog` | GET | all products |
//! | `/orders` | GET | all orders |
//! | `/orders/{id}` | GET | one order |
//! | `/placeOrder` | POST | the committed order |
//! | `/updateOrderStatus` | POST | the updated order |
//!
//! Errors are `{"error": code, "message": text}` with
//! 400 `malformed_input`, 404 `not_found`, 405 `method_not_supported`,
//! 409 `insufficient_stock` or 503 `unavailable`.

pub mod dto;
pub mod errors;

use crate::clients::OrderDeskClient;
use crate::desk::OrderError;
use crate::model::{Order, OrderId, OrderStatus, Product};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use dto::{PlaceOrderRequest, UpdateStatusRequest};
use errors::{method_not_supported, route_not_found};

pub fn router(client: OrderDeskClient) -> Router {
    Router::new()
        .route(
            "/productCatalog",
            get(list_products).fallback(method_not_supported),
        )
        .route("/orders", get(list_orders).fallback(method_not_supported))
        .route("/orders/{id}", get(get_order).fallback(method_not_supported))
        .route("/placeOrder", post(place_order).fallback(method_not_supported))
        .route(
            "/updateOrderStatus",
            post(update_status).fallback(method_not_supported),
        )
        .fallback(route_not_found)
        .with_state(client)
}

async fn list_products(
    State(client): State<OrderDeskClient>,
) -> Result<Json<Vec<Product>>, OrderError> {
    client.list_products().await.map(Json)
}

async fn list_orders(State(client): State<OrderDeskClient>) -> Result<Json<Vec<Order>>, OrderError> {
    client.list_orders().await.map(Json)
}

async fn get_order(
    State(client): State<OrderDeskClient>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Order>, OrderError> {
    let Path(id) = id.map_err(|e| OrderError::MalformedInput(e.body_text()))?;
    client.get_order(OrderId(id)).await.map(Json)
}

async fn place_order(
    State(client): State<OrderDeskClient>,
    body: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<Json<Order>, OrderError> {
    let Json(body) = body.map_err(|e| OrderError::MalformedInput(e.body_text()))?;
    client.place_order(body.products).await.map(Json)
}

async fn update_status(
    State(client): State<OrderDeskClient>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<Order>, OrderError> {
    let Json(body) = body.map_err(|e| OrderError::MalformedInput(e.body_text()))?;
    client
        .update_status(body.order_id, OrderStatus::from(body.order_status))
        .await
        .map(Json)
}
