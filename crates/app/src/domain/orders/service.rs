//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::orders::{
        data::OrderDetails,
        errors::OrdersServiceError,
        records::{OrderId, OrderRecord},
        repository::PgOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(name = "orders.service.list_orders", skip(self), err)]
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        Ok(self.repository.list_orders(self.db.pool()).await?)
    }

    #[tracing::instrument(
        name = "orders.service.get_order",
        skip(self),
        fields(order_id = %order),
        err
    )]
    async fn get_order(&self, order: OrderId) -> Result<OrderRecord, OrdersServiceError> {
        Ok(self.repository.get_order(self.db.pool(), order).await?)
    }

    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, details),
        fields(product_id = %details.product_id(), quantity = details.quantity()),
        err
    )]
    async fn create_order(&self, details: OrderDetails) -> Result<OrderRecord, OrdersServiceError> {
        let record = self
            .repository
            .create_order(self.db.pool(), &details)
            .await?;

        info!(order_id = %record.id, "created order");

        Ok(record)
    }

    #[tracing::instrument(
        name = "orders.service.update_order",
        skip(self, details),
        fields(order_id = %order, product_id = %details.product_id(), quantity = details.quantity()),
        err
    )]
    async fn update_order(
        &self,
        order: OrderId,
        details: OrderDetails,
    ) -> Result<OrderRecord, OrdersServiceError> {
        Ok(self
            .repository
            .update_order(self.db.pool(), order, &details)
            .await?)
    }

    #[tracing::instrument(
        name = "orders.service.delete_order",
        skip(self),
        fields(order_id = %order),
        err
    )]
    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError> {
        let rows_affected = self.repository.delete_order(self.db.pool(), order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        info!(order_id = %order, "deleted order");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves all orders, most recent first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Result<OrderRecord, OrdersServiceError>;

    /// Inserts a new order; the store assigns its ID, status and creation time.
    async fn create_order(&self, details: OrderDetails) -> Result<OrderRecord, OrdersServiceError>;

    /// Replaces the product ID and quantity of an existing order.
    async fn update_order(
        &self,
        order: OrderId,
        details: OrderDetails,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Deletes an order.
    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError>;
}
