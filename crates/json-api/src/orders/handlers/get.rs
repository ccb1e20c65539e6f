//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orders_app::domain::orders::records::OrderRecord;

use crate::{extensions::*, orders::errors::into_lookup_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub id: i32,

    /// The ordered product
    pub product_id: String,

    /// Number of units ordered
    pub quantity: i32,

    /// Order status
    pub status: String,

    /// The date and time the order was created
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.id.into(),
            product_id: order.product_id,
            quantity: order.quantity,
            status: order.status,
            created_at: order.created_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Returns a single order.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order(id.into_inner().into())
        .await
        .map_err(into_lookup_status_error)?;

    Ok(Json(order.into()))
}
