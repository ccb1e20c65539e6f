//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

/// Rejected order payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOrderError {
    #[error("product_id is required")]
    MissingProductId,

    #[error("quantity must be greater than zero, got {0}")]
    NonPositiveQuantity(i32),
}

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("invalid order: {0}")]
    Invalid(#[from] InvalidOrderError),

    #[error("storage error: {0}")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            other => Self::Sql(other),
        }
    }
}
