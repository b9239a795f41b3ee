//! Summary Routes
//!
//! - GET /api/v1/summary - Aggregates and selector options as JSON

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{SummaryResponse, Totals};
use crate::api::state::AppState;

/// GET /api/v1/summary
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let dashboard = &state.dashboard;
    let summary = dashboard.summary();
    let dataset = dashboard.dataset();

    Json(SummaryResponse {
        categories: summary.categories.clone(),
        payments: summary.payments.clone(),
        states: dashboard.state_options().to_vec(),
        default_state: dashboard.default_state().map(str::to_string),
        totals: Totals {
            order_items: summary.order_items,
            distinct_orders: summary.distinct_orders,
            distinct_products: summary.distinct_products,
            customer_locations: dataset.customer_locations.len(),
            cities: dataset.city_orders.len(),
        },
    })
}
