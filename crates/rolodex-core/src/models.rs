//! Customer domain model and strongly-typed identifier.
//!
//! `Customer` is an immutable value type mapped one-to-one onto rows of the
//! `customers` table. `NewCustomer` carries a sanitized name pair and can
//! only be constructed through the sanitization pipeline, so anything
//! handed to the storage layer already satisfies the persisted-data
//! invariants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sanitize::{sanitize, InvalidNameError, NameField};

/// Strongly-typed customer identifier.
///
/// Wraps the storage-assigned `BIGSERIAL` key. Ids are unique and
/// monotonically increasing; they are never reused after deletion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A customer record as persisted in the `customers` table.
///
/// Invariant: both names are non-empty, at most 50 characters, and contain
/// no character from the sanitizer's rejected set. Records are immutable
/// after creation; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Storage-assigned unique identifier.
    pub id: CustomerId,

    /// Sanitized first name.
    pub first_name: String,

    /// Sanitized last name.
    pub last_name: String,
}

/// A sanitized name pair ready for insertion.
///
/// Fields are private: the only way to obtain a `NewCustomer` is through
/// [`NewCustomer::from_input`], which runs both names through the
/// sanitizer. The storage layer can therefore bind them without further
/// checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    first_name: String,
    last_name: String,
}

impl NewCustomer {
    /// Validates and sanitizes a raw name pair.
    ///
    /// A missing field is treated as empty input. The first name is
    /// validated before the last name, so when both are invalid the error
    /// names the first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNameError`] identifying the offending field and
    /// the sanitization failure.
    pub fn from_input(
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Self, InvalidNameError> {
        let first_name = sanitize(first_name.unwrap_or_default())
            .map_err(|source| InvalidNameError { field: NameField::FirstName, source })?;
        let last_name = sanitize(last_name.unwrap_or_default())
            .map_err(|source| InvalidNameError { field: NameField::LastName, source })?;

        Ok(Self { first_name, last_name })
    }

    /// The sanitized first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The sanitized last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}
