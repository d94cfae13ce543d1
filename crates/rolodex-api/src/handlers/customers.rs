//! Customer CRUD and search handlers.
//!
//! Each handler validates its input, then issues exactly one repository
//! call. No handler holds state between requests; the database is the
//! single source of truth.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use rolodex_core::{sanitize::sanitize, Customer, CustomerId, NewCustomer};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::ApiError;
use crate::server::AppState;

/// Request body for creating a customer.
///
/// Both fields are raw, untrusted input; they pass through the sanitizer
/// before touching storage. Missing fields are treated as empty input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    /// Raw first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Raw last name.
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Query parameters for customer search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw name substring to match; absent or blank yields an empty result.
    pub name: Option<String>,
}

/// Lists all customers ordered by ascending id.
///
/// Always succeeds; an empty store produces an empty array.
#[instrument(name = "list_customers", skip(state))]
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.storage.customers.list().await?;

    debug!(count = customers.len(), "Listed customers");
    Ok(Json(customers))
}

/// Fetches a single customer by id.
///
/// # Errors
///
/// Returns 404 when no customer has the given id.
#[instrument(name = "get_customer", skip(state))]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    let id = CustomerId(id);

    state.storage.customers.find_by_id(id).await?.map(Json).ok_or(ApiError::NotFound(id))
}

/// Creates a customer from a raw name pair.
///
/// The body is rejected outright when missing or unparsable; both names
/// are then sanitized, and only a fully valid pair reaches storage. The
/// created record, including its generated id, comes back from the insert
/// itself.
///
/// # Errors
///
/// Returns 400 when the payload is absent or either name fails
/// sanitization; no row is inserted in that case.
#[instrument(name = "create_customer", skip(state, payload))]
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::NullPayload)?;

    let new = NewCustomer::from_input(request.first_name.as_deref(), request.last_name.as_deref())?;

    let customer = state.storage.customers.insert(&new).await?;

    info!(id = %customer.id, "Customer created");
    Ok(Json(customer))
}

/// Deletes a customer by id.
///
/// # Errors
///
/// Returns 404 when no row was deleted.
#[instrument(name = "delete_customer", skip(state))]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let id = CustomerId(id);

    if state.storage.customers.delete(id).await? {
        info!(%id, "Customer deleted");
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(id))
    }
}

/// Searches customers by case-insensitive name substring.
///
/// A missing, blank, or fully-sanitized-away term returns an empty list
/// without querying the database. It is never an error.
#[instrument(name = "search_customers", skip(state))]
pub async fn search_customers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let term = match params.name.as_deref().map(sanitize) {
        Some(Ok(term)) => term,
        Some(Err(_)) | None => {
            debug!("Blank or unsanitizable search term, returning empty result");
            return Ok(Json(Vec::new()));
        },
    };

    let customers = state.storage.customers.search(&term).await?;

    debug!(count = customers.len(), "Search completed");
    Ok(Json(customers))
}
