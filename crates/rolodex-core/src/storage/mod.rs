//! Database access layer implementing the repository pattern for customer
//! persistence.
//!
//! All request-path database operations go through the repositories in
//! this module, keeping every statement parameterized and auditable; the
//! only SQL outside it is the startup bootstrap's DDL. The table is the
//! sole owner of record lifetime: no in-memory copy of customer data is
//! held across requests.

use std::sync::Arc;

use sqlx::PgPool;

pub mod customers;

use crate::error::Result;

/// Container for repository instances providing unified database access.
///
/// Entry point for all database operations. Manages a shared connection
/// pool and provides type-safe access to each repository.
#[derive(Clone)]
pub struct Storage {
    /// Repository for customer records.
    pub customers: Arc<customers::Repository>,
}

impl Storage {
    /// Creates a new storage instance with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        let pool = Arc::new(pool);

        Self { customers: Arc::new(customers::Repository::new(pool)) }
    }

    /// Performs a health check on the database connection.
    ///
    /// Executes a simple query to verify database connectivity.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Database` if the connection is unhealthy or
    /// the query times out.
    pub async fn health_check(&self) -> Result<()> {
        let _: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&*self.customers.pool()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn storage_can_be_created() {
        // Instantiation only; actual database behavior is covered by the
        // integration tests.
        let pool = sqlx::PgPool::connect_lazy("postgresql://test").unwrap();
        let _storage = Storage::new(pool);
    }
}
