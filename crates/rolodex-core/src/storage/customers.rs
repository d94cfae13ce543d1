//! Repository for customer database operations.
//!
//! Every operation is a single parameterized statement against the
//! `customers` table. No operation spans multiple statements inside a
//! transaction; the database's per-statement guarantees are the only
//! synchronization point.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Customer, CustomerId, NewCustomer},
};

/// Repository for customer database operations.
pub struct Repository {
    pool: Arc<PgPool>,
}

impl Repository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<PgPool> {
        self.pool.clone()
    }

    /// Lists all customers ordered by ascending id.
    ///
    /// An empty result set is valid, not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn list(&self) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name
            FROM customers
            ORDER BY id
            ",
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(customers)
    }

    /// Finds a customer by id.
    ///
    /// The id column is the primary key, so at most one row can match.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name
            FROM customers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(customer)
    }

    /// Inserts a new customer and returns the created record.
    ///
    /// The generated id comes back from the same statement via
    /// `RETURNING`, so concurrent inserts of identical name pairs cannot
    /// be confused with each other.
    ///
    /// # Errors
    ///
    /// Returns error if the insert fails.
    pub async fn insert(&self, new: &NewCustomer) -> Result<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            INSERT INTO customers (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            ",
        )
        .bind(new.first_name())
        .bind(new.last_name())
        .fetch_one(&*self.pool)
        .await?;

        Ok(customer)
    }

    /// Deletes a customer by id.
    ///
    /// Returns `true` if a row was deleted, `false` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns error if the delete fails.
    pub async fn delete(&self, id: CustomerId) -> Result<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM customers
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Searches customers by case-insensitive name substring.
    ///
    /// Matches the term against first OR last name, ordered by ascending
    /// id. The caller passes an already-sanitized term; `%` cannot appear
    /// in it because the sanitizer deletes it, so the bound pattern's only
    /// wildcards are the surrounding ones added here.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn search(&self, term: &str) -> Result<Vec<Customer>> {
        let pattern = format!("%{term}%");

        let customers = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name
            FROM customers
            WHERE first_name ILIKE $1 OR last_name ILIKE $1
            ORDER BY id
            ",
        )
        .bind(&pattern)
        .fetch_all(&*self.pool)
        .await?;

        Ok(customers)
    }

    /// Counts all customers.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r"
            SELECT COUNT(*) FROM customers
            ",
        )
        .fetch_one(&*self.pool)
        .await?;

        Ok(count.0)
    }
}
