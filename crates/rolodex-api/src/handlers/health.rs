//! Health check and ping handlers for service monitoring.
//!
//! Both endpoints are designed to be called frequently by load balancers
//! and browser clients, so they avoid database work entirely; connection
//! problems surface through the customer endpoints' 500 responses and the
//! logs, not here.

use axum::extract::State;
use tracing::{info, instrument};

use crate::server::AppState;

/// Health check endpoint handler.
///
/// Returns a plain-text status line including the active deployment
/// profile.
#[instrument(name = "health_check", skip(state))]
pub async fn health_check(State(state): State<AppState>) -> String {
    info!(profile = %state.profile, "Health check called");

    format!("Customer records API is running! Profile: {}", state.profile)
}

/// Minimal connectivity probe.
pub async fn ping() -> &'static str {
    "pong"
}
