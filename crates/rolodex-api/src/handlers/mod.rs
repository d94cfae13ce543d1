//! HTTP request handlers for the customer records API.
//!
//! All handlers follow a consistent pattern:
//! - Input validation before any database work
//! - Tracing for observability
//! - A single parameterized statement per operation
//! - Standardized JSON error responses
//!
//! Handlers are grouped by functionality:
//! - `customers` - Customer CRUD and search endpoints
//! - `health` - Health check and ping probes
//!
//! # Error Handling
//!
//! Validation failures map to 400, missing records to 404, and storage
//! failures to 500. Storage errors are logged with full detail but the
//! response body stays generic; internal database structure is never
//! exposed to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rolodex_core::{CoreError, CustomerId, InvalidNameError, NameField, SanitizeError};
use serde::Serialize;
use tracing::error;

pub mod customers;
pub mod health;

pub use customers::{
    create_customer, delete_customer, get_customer, list_customers, search_customers,
};
pub use health::{health_check, ping};

/// Error response with code and message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details including code and message
    pub error: ErrorDetail,
}

/// Detailed error information.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Stable machine-readable error code
    pub code: String,
    /// Human-readable error description
    pub message: String,
}

/// Request-level errors mapped to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was missing or not parsable as JSON.
    NullPayload,
    /// A name field failed sanitization.
    InvalidName(InvalidNameError),
    /// No customer exists with the given id.
    NotFound(CustomerId),
    /// A storage operation failed.
    Storage(CoreError),
}

impl From<InvalidNameError> for ApiError {
    fn from(err: InvalidNameError) -> Self {
        Self::InvalidName(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Storage(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NullPayload | Self::InvalidName(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> String {
        match self {
            Self::NullPayload => "null_payload".to_string(),
            Self::InvalidName(err) => match err.field {
                NameField::FirstName => "invalid_first_name".to_string(),
                NameField::LastName => "invalid_last_name".to_string(),
            },
            Self::NotFound(_) | Self::Storage(CoreError::NotFound(_)) => "not_found".to_string(),
            Self::Storage(_) => "internal_error".to_string(),
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NullPayload => "Request body is missing or not valid JSON".to_string(),
            Self::InvalidName(err) => match err.source {
                SanitizeError::EmptyInput => format!("{} cannot be empty", err.field.label()),
                SanitizeError::EmptyAfterSanitization => {
                    format!("{} cannot be empty after sanitization", err.field.label())
                },
            },
            Self::NotFound(id) => format!("Customer {id} not found"),
            Self::Storage(CoreError::NotFound(_)) => "Customer not found".to_string(),
            // Storage detail is logged, never sent to the client.
            Self::Storage(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Storage(err) = &self {
            error!(error = %err, "Storage operation failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail { code: self.code(), message: self.message() },
        };

        (self.status(), Json(body)).into_response()
    }
}
