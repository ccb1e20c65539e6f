//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use orders_app::domain::orders::{InvalidOrderError, OrdersServiceError};

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => order_not_found(),
        OrdersServiceError::Invalid(source) => invalid_order(source),
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error().brief(source.to_string())
        }
    }
}

/// The get path reports every lookup failure as a missing order.
pub(crate) fn into_lookup_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::Sql(source) => {
            error!("order lookup failed: {source}");

            order_not_found()
        }
        other => into_status_error(other),
    }
}

pub(crate) fn invalid_order(error: InvalidOrderError) -> StatusError {
    StatusError::bad_request().brief(error.to_string())
}

fn order_not_found() -> StatusError {
    StatusError::not_found().brief("Order not found")
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = into_status_error(OrdersServiceError::NotFound);

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(error.brief, "Order not found");
    }

    #[test]
    fn test_invalid_order_maps_to_400_with_reason() {
        let error = into_status_error(OrdersServiceError::Invalid(
            InvalidOrderError::NonPositiveQuantity(0),
        ));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "quantity must be greater than zero, got 0");
    }

    #[test]
    fn test_storage_error_maps_to_500_with_text() {
        let error = into_status_error(OrdersServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.brief, sqlx::Error::PoolTimedOut.to_string());
    }

    #[test]
    fn test_lookup_storage_error_maps_to_404() {
        let error = into_lookup_status_error(OrdersServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(error.code, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_lookup_keeps_other_mappings() {
        let error = into_lookup_status_error(OrdersServiceError::Invalid(
            InvalidOrderError::MissingProductId,
        ));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
    }
}
