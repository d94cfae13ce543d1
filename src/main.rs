//! Customer records service.
//!
//! Main entry point for the rolodex server. Initializes logging and
//! configuration, connects to PostgreSQL, runs the startup bootstrap,
//! and serves the HTTP API until shutdown.

use std::time::Duration;

use anyhow::{Context, Result};
use rolodex_api::{start_server, AppState, Config};
use rolodex_core::Storage;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

mod bootstrap;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting customer records service");

    // Load configuration from defaults, config file, and environment
    let config = Config::load()?;
    info!(
        database_url = %config.database_url_masked(),
        host = %config.host,
        port = config.port,
        profile = %config.profile,
        "Configuration loaded"
    );

    // Create database connection pool
    let db_pool = create_database_pool(&config).await?;
    info!("Database connection pool established");

    // Prepare schema and sample data according to the deployment profile.
    // This runs before the server accepts any request; the request core
    // never creates or seeds tables.
    bootstrap::prepare_database(&db_pool, &config).await;

    let state =
        AppState { storage: Storage::new(db_pool.clone()), profile: config.profile.clone() };
    let addr = config.parse_server_addr()?;

    info!(addr = %addr, "Customer API ready at /api/customers");

    start_server(state, addr, config.request_timeout()).await?;

    // Close database connections
    db_pool.close().await;
    info!("Database connections closed");

    info!("Shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,rolodex=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true).with_file(true).with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

/// Creates the database connection pool with retry logic.
async fn create_database_pool(config: &Config) -> Result<sqlx::PgPool> {
    let mut retries = 0;
    const MAX_RETRIES: u32 = 5;
    const RETRY_DELAY: Duration = Duration::from_secs(2);

    loop {
        match PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connection_timeout))
            .idle_timeout(Duration::from_secs(config.database_idle_timeout))
            .max_lifetime(Duration::from_secs(config.database_max_lifetime))
            .connect(&config.database_url)
            .await
        {
            Ok(pool) => {
                // Verify connection works
                sqlx::query("SELECT 1")
                    .fetch_one(&pool)
                    .await
                    .context("Failed to verify database connection")?;

                return Ok(pool);
            },
            Err(_e) if retries < MAX_RETRIES => {
                retries += 1;
                info!(
                    attempt = retries,
                    max_retries = MAX_RETRIES,
                    "Database connection failed, retrying..."
                );
                tokio::time::sleep(RETRY_DELAY).await;
            },
            Err(e) => {
                return Err(e).context("Failed to create database connection pool after retries");
            },
        }
    }
}
