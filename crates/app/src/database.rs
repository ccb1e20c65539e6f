//! Database connection management

use std::time::Duration;

use sqlx::{Connection, PgPool, postgres::PgPoolOptions, query};

/// SQL used to create the `orders` table when it is missing.
pub const CREATE_ORDERS_TABLE_SQL: &str = include_str!("sql/create_orders_table.sql");

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection pool limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Upper bound on open connections.
    pub max_connections: u32,

    /// How long a caller waits for a free connection before giving up.
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Acquire a pooled connection and ping the server over it.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or the ping fails.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        conn.ping().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await
}

/// Create the `orders` table if it does not exist yet.
///
/// # Errors
///
/// Returns an error when the statement cannot be executed.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    query(CREATE_ORDERS_TABLE_SQL).execute(pool).await?;

    Ok(())
}
