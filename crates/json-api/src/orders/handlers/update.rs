//! Update Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        requests::{OrderRequest, read_order_details},
    },
    state::State,
};

/// Order Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderUpdatedResponse {
    pub id: i32,
    pub product_id: String,
    pub quantity: i32,
}

/// Update Order Handler
///
/// Replaces the product and quantity of an existing order. Status and
/// creation time are left as they were.
#[endpoint(
    tags("orders"),
    summary = "Update Order",
    request_body = OrderRequest,
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let details = read_order_details(req).await?;

    let order = state
        .app
        .orders
        .update_order(id.into_inner().into(), details)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderUpdatedResponse {
        id: order.id.into(),
        product_id: order.product_id,
        quantity: order.quantity,
    }))
}
