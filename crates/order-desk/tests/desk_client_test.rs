use actor_framework::mock::{create_mock_client, expect_request, MockClient};
use actor_framework::reply;
use order_desk::clients::OrderDeskClient;
use order_desk::desk::{DeskRequest, OrderDesk, OrderError};
use order_desk::model::{
    LineRequest, Order, OrderDraft, OrderId, OrderLine, OrderStatus, Product, ProductId,
};

fn sample_order(id: u64) -> Order {
    Order::placed(
        OrderId(id),
        OrderDraft {
            lines: vec![OrderLine {
                product: Product::new(2, "Product2", "Regular", 150.0, 19),
                quantity: 1,
            }],
            total: 150.0,
        },
    )
}

#[tokio::test]
async fn test_place_order_forwards_lines() {
    let (inner, mut receiver) = create_mock_client::<OrderDesk>(4);
    let client = OrderDeskClient::new(inner);

    let call = tokio::spawn(async move {
        client
            .place_order(vec![LineRequest::new(2, 1), LineRequest::new(2, 3)])
            .await
    });

    let Some(DeskRequest::PlaceOrder { lines, respond_to }) =
        expect_request::<OrderDesk>(&mut receiver).await
    else {
        panic!("Expected PlaceOrder request");
    };
    assert_eq!(lines, vec![LineRequest::new(2, 1), LineRequest::new(2, 3)]);
    reply(respond_to, Ok(sample_order(1)));

    let order = call.await.unwrap().unwrap();
    assert_eq!(order.id, OrderId(1));
}

#[tokio::test]
async fn test_domain_errors_pass_through() {
    let mock = MockClient::<OrderDesk>::new();
    mock.expect(|request| match request {
        DeskRequest::UpdateStatus { id, respond_to, .. } => {
            reply(respond_to, Err(OrderError::OrderNotFound(id)))
        }
        other => panic!("Unexpected request: {other:?}"),
    });
    mock.expect(|request| match request {
        DeskRequest::PlaceOrder { respond_to, .. } => reply(
            respond_to,
            Err(OrderError::InsufficientStock {
                product_id: ProductId(5),
                requested: 30,
                allowed: 10,
            }),
        ),
        other => panic!("Unexpected request: {other:?}"),
    });
    let client = OrderDeskClient::new(mock.client());

    let err = client
        .update_status(OrderId(3), OrderStatus::Dispatched)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::OrderNotFound(OrderId(3)));

    let err = client
        .place_order(vec![LineRequest::new(5, 30)])
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InsufficientStock { allowed: 10, .. }));

    mock.verify();
}

#[tokio::test]
async fn test_listing_requests() {
    let mock = MockClient::<OrderDesk>::new();
    mock.expect(|request| match request {
        DeskRequest::ListProducts { respond_to } => {
            reply(respond_to, vec![Product::new(1, "Product1", "Premium", 100.0, 10)])
        }
        other => panic!("Unexpected request: {other:?}"),
    });
    mock.expect(|request| match request {
        DeskRequest::ListOrders { respond_to } => {
            reply(respond_to, vec![sample_order(1), sample_order(2)])
        }
        other => panic!("Unexpected request: {other:?}"),
    });
    mock.expect(|request| match request {
        DeskRequest::GetOrder { id, respond_to } => reply(respond_to, Ok(sample_order(id.0))),
        other => panic!("Unexpected request: {other:?}"),
    });
    let client = OrderDeskClient::new(mock.client());

    let products = client.list_products().await.unwrap();
    assert!(products[0].is_premium());

    let orders = client.list_orders().await.unwrap();
    assert_eq!(orders.len(), 2);

    let order = client.get_order(OrderId(8)).await.unwrap();
    assert_eq!(order.id, OrderId(8));

    mock.verify();
}

#[tokio::test]
async fn test_dropped_reply_is_unavailable() {
    let mock = MockClient::<OrderDesk>::new();
    let client = OrderDeskClient::new(mock.client());

    let err = client.list_orders().await.unwrap_err();

    assert!(matches!(err, OrderError::Unavailable(_)));
}
