//! Store liveness check.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::database::Db;

#[derive(Debug, Error)]
pub enum HealthCheckError {
    #[error("database unreachable: {0}")]
    Unreachable(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct PgHealthService {
    db: Db,
}

impl PgHealthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthService for PgHealthService {
    async fn check(&self) -> Result<(), HealthCheckError> {
        self.db.ping().await.map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Checks that a pooled connection can reach the database.
    async fn check(&self) -> Result<(), HealthCheckError>;
}
