//! Create Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use orders_app::domain::orders::records::OrderRecord;

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        requests::{OrderRequest, read_order_details},
    },
    state::State,
};

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderCreatedResponse {
    /// Assigned order ID
    pub id: i32,
    pub product_id: String,
    pub quantity: i32,
    pub status: String,
}

impl From<OrderRecord> for OrderCreatedResponse {
    fn from(order: OrderRecord) -> Self {
        OrderCreatedResponse {
            id: order.id.into(),
            product_id: order.product_id,
            quantity: order.quantity,
            status: order.status,
        }
    }
}

/// Create Order Handler
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    request_body = OrderRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let details = read_order_details(req).await?;

    let order = state
        .app
        .orders
        .create_order(details)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use orders_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::{
        OrdersCall, make_order, orders_mock_allowing, orders_service, strict_orders_mock,
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").post(handler))
    }

    #[tokio::test]
    async fn test_create_order_success() -> TestResult {
        let mut orders = orders_mock_allowing(&[OrdersCall::Create]);

        orders
            .expect_create_order()
            .once()
            .withf(|details| details.product_id() == "sku-1" && details.quantity() == 2)
            .return_once(|_| Ok(make_order(1)));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({ "product_id": "sku-1", "quantity": 2 }))
            .send(&make_service(orders))
            .await;

        let body: OrderCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/orders/1"));
        assert_eq!(body.id, 1);
        assert_eq!(body.product_id, "sku-1");
        assert_eq!(body.quantity, 2);
        assert_eq!(body.status, "created");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_allows_whitespace_product_id() -> TestResult {
        let mut orders = orders_mock_allowing(&[OrdersCall::Create]);

        orders
            .expect_create_order()
            .once()
            .withf(|details| details.product_id() == " ")
            .return_once(|_| Ok(make_order(1)));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "product_id": " ", "quantity": 1 }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_without_content_type() -> TestResult {
        let mut orders = orders_mock_allowing(&[OrdersCall::Create]);

        orders
            .expect_create_order()
            .once()
            .withf(|details| details.product_id() == "sku-42" && details.quantity() == 3)
            .return_once(|_| Ok(make_order(42)));

        let res = TestClient::post("http://example.com/orders")
            .body(r#"{"product_id":"sku-42","quantity":3}"#)
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_with_text_plain_body() -> TestResult {
        let mut orders = orders_mock_allowing(&[OrdersCall::Create]);

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Ok(make_order(42)));

        let res = TestClient::post("http://example.com/orders")
            .text(r#"{"product_id":"sku-42","quantity":3}"#)
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_empty_body_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/orders")
            .send(&make_service(strict_orders_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_malformed_json_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/orders")
            .raw_json("{ not json")
            .send(&make_service(strict_orders_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_missing_field_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "product_id": "sku-1" }))
            .send(&make_service(strict_orders_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_quantity_out_of_range_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "product_id": "sku-1", "quantity": 4_294_967_296_i64 }))
            .send(&make_service(strict_orders_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_empty_product_id_returns_400() -> TestResult {
        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({ "product_id": "", "quantity": 1 }))
            .send(&make_service(strict_orders_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(res.take_string().await?.contains("product_id is required"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_non_positive_quantity_returns_400() -> TestResult {
        for quantity in [0, -3] {
            let res = TestClient::post("http://example.com/orders")
                .json(&json!({ "product_id": "sku-1", "quantity": quantity }))
                .send(&make_service(strict_orders_mock()))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_storage_error_returns_500() -> TestResult {
        let mut orders = orders_mock_allowing(&[OrdersCall::Create]);

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "product_id": "sku-1", "quantity": 2 }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
