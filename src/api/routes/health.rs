//! Health Routes
//!
//! - GET /health/live - Process is up
//! - GET /health/ready - Tables hold data
//! - GET /health - Table sizes, boundary source and uptime

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, TableCounts};
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Tables are loaded before the listener binds, so the only way to be
/// unready is an empty dataset.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dataset = state.dashboard.dataset();
    let status = if state.is_ready() { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        tables: TableCounts {
            order_items: dataset.order_items.len(),
            customer_locations: dataset.customer_locations.len(),
            city_orders: dataset.city_orders.len(),
            state_categories: dataset.state_categories.len(),
        },
        boundaries: state.dashboard.boundaries_name().to_string(),
        started_at: state.started_at,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
