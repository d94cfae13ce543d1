//! Core domain model for the customer records service.
//!
//! Provides the `Customer` value type, the input sanitization pipeline
//! applied to user-supplied names, the error taxonomy, and the storage
//! layer over PostgreSQL. The API crate depends on these foundational
//! types; no HTTP concern lives here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod sanitize;
pub mod storage;

pub use error::{CoreError, Result};
pub use models::{Customer, CustomerId, NewCustomer};
pub use sanitize::{sanitize, InvalidNameError, NameField, SanitizeError};
pub use storage::Storage;
