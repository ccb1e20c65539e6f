//! Order Requests

use salvo::{
    http::{ParseError, StatusError},
    oapi::ToSchema,
    prelude::Request,
};
use serde::{Deserialize, Serialize};

use orders_app::domain::orders::{InvalidOrderError, data::OrderDetails};

use crate::orders::errors::invalid_order;

/// Order payload accepted by create and update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderRequest {
    /// Product identifier, must not be empty
    pub product_id: String,

    /// Number of units, must be greater than zero
    pub quantity: i32,
}

impl TryFrom<OrderRequest> for OrderDetails {
    type Error = InvalidOrderError;

    fn try_from(request: OrderRequest) -> Result<Self, Self::Error> {
        OrderDetails::new(request.product_id, request.quantity)
    }
}

/// Decode the request body as an [`OrderRequest`] and validate it.
///
/// The body is parsed as JSON whatever `Content-Type` the client sent.
pub(crate) async fn read_order_details(req: &mut Request) -> Result<OrderDetails, StatusError> {
    let payload = req.payload().await.map_err(|source| match source {
        ParseError::PayloadTooLarge => StatusError::payload_too_large(),
        other => StatusError::bad_request().brief(format!("failed to read request body: {other}")),
    })?;

    let request = parse_order_request(payload.as_ref())?;

    OrderDetails::try_from(request).map_err(invalid_order)
}

fn parse_order_request(body: &[u8]) -> Result<OrderRequest, StatusError> {
    serde_json::from_slice(body)
        .map_err(|source| StatusError::bad_request().brief(format!("invalid order body: {source}")))
}
