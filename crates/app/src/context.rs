//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db, PoolSettings},
    domain::orders::{OrdersService, PgOrdersService},
    health::{HealthService, PgHealthService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database: {0}")]
    Database(#[source] sqlx::Error),

    #[error("failed to initialize schema: {0}")]
    Schema(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub orders: Arc<dyn OrdersService>,
    pub health: Arc<dyn HealthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Connects the pool and makes sure the `orders` table exists before
    /// handing out any service.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or creating
    /// the schema fails.
    pub async fn from_database_url(
        url: &str,
        settings: PoolSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        database::ensure_schema(&pool)
            .await
            .map_err(AppInitError::Schema)?;

        Ok(Self::from_db(&Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            orders: Arc::new(PgOrdersService::new(db.clone())),
            health: Arc::new(PgHealthService::new(db.clone())),
        }
    }
}
