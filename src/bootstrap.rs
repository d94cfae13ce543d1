//! Startup schema bootstrap and sample data seeding.
//!
//! Deployment concern, deliberately kept outside the request-handling
//! core: the API crates never create or seed tables. Behavior depends on
//! the deployment profile:
//!
//! - `development`: drop and recreate the `customers` table on every
//!   start, then seed a small fixed set of sample customers.
//! - `production`: create the table only if it is missing, and seed
//!   sample data only when the table is empty.
//!
//! Bootstrap failures are logged but never abort startup; a broken
//! database surfaces through the customer endpoints and the logs.

use rolodex_api::Config;
use sqlx::PgPool;
use tracing::{error, info, warn};

/// Sample customers seeded in every profile.
const SAMPLE_CUSTOMERS: &[(&str, &str)] =
    &[("John", "Woo"), ("Jeff", "Dean"), ("Josh", "Bloch"), ("Josh", "Long")];

/// Additional samples seeded only in production's first-run path.
const EXTRA_SAMPLE_CUSTOMERS: &[(&str, &str)] = &[("Jane", "Doe"), ("Alice", "Smith")];

/// Prepares the `customers` table according to the deployment profile.
pub async fn prepare_database(pool: &PgPool, config: &Config) {
    if config.profile == "production" {
        prepare_production(pool, config.seed_on_startup).await;
    } else {
        prepare_development(pool, config.seed_on_startup).await;
    }
}

/// Development mode: rebuild the table from scratch on every start.
async fn prepare_development(pool: &PgPool, seed: bool) {
    info!("Development mode: initializing database table and sample data");

    let result = async {
        sqlx::query("DROP TABLE IF EXISTS customers").execute(pool).await?;
        sqlx::query(
            r"
            CREATE TABLE customers(
                id BIGSERIAL PRIMARY KEY,
                first_name VARCHAR(255) NOT NULL,
                last_name VARCHAR(255) NOT NULL
            )
            ",
        )
        .execute(pool)
        .await?;

        if seed {
            seed_customers(pool, SAMPLE_CUSTOMERS).await?;
            info!(count = SAMPLE_CUSTOMERS.len(), "Database initialized with sample customers");
        }

        Ok::<(), sqlx::Error>(())
    }
    .await;

    if let Err(e) = result {
        error!(error = %e, "Database initialization failed");
    }
}

/// Production mode: create the table when missing, seed only when empty.
async fn prepare_production(pool: &PgPool, seed: bool) {
    info!("Production mode: checking and initializing database if needed");

    match customer_count(pool).await {
        Ok(count) => {
            info!(count, "Connected to database, customers table present");
        },
        Err(e) => {
            warn!(error = %e, "Customers table missing or unreachable, attempting to create");

            let result = async {
                sqlx::query(
                    r"
                    CREATE TABLE IF NOT EXISTS customers(
                        id BIGSERIAL PRIMARY KEY,
                        first_name VARCHAR(255) NOT NULL,
                        last_name VARCHAR(255) NOT NULL,
                        created_at TIMESTAMPTZ DEFAULT NOW()
                    )
                    ",
                )
                .execute(pool)
                .await?;

                let existing = customer_count(pool).await?;
                if existing == 0 && seed {
                    seed_customers(pool, SAMPLE_CUSTOMERS).await?;
                    seed_customers(pool, EXTRA_SAMPLE_CUSTOMERS).await?;
                    info!(
                        count = SAMPLE_CUSTOMERS.len() + EXTRA_SAMPLE_CUSTOMERS.len(),
                        "Table created empty, sample customers added"
                    );
                } else {
                    info!(count = existing, "Table exists with existing customers");
                }

                Ok::<(), sqlx::Error>(())
            }
            .await;

            if let Err(e) = result {
                // Startup continues; a broken database shows up in request
                // errors and logs rather than preventing the process from
                // serving health checks.
                error!(error = %e, "Failed to create table or add sample data");
            }
        },
    }
}

async fn customer_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers").fetch_one(pool).await?;
    Ok(count.0)
}

async fn seed_customers(pool: &PgPool, customers: &[(&str, &str)]) -> Result<(), sqlx::Error> {
    for &(first_name, last_name) in customers {
        sqlx::query("INSERT INTO customers (first_name, last_name) VALUES ($1, $2)")
            .bind(first_name)
            .bind(last_name)
            .execute(pool)
            .await?;
    }

    Ok(())
}
