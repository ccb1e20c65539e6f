use std::time::Duration;

use clap::Args;
use orders_app::database::{self, PoolSettings};

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Seconds to wait for a connection before giving up
    #[arg(long, default_value_t = 5)]
    connect_timeout_seconds: u64,
}

pub(crate) async fn run(args: InitArgs) -> Result<(), String> {
    let settings = PoolSettings {
        max_connections: 1,
        acquire_timeout: Duration::from_secs(args.connect_timeout_seconds),
    };

    let pool = database::connect(&args.database_url, settings)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::ensure_schema(&pool)
        .await
        .map_err(|error| format!("failed to create orders table: {error}"))?;

    pool.close().await;

    println!("ensured orders table");

    Ok(())
}
