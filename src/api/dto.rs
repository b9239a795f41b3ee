//! Data Transfer Objects
//!
//! Query parameters and JSON response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::{CategoryCount, PaymentCount};

/// `?state=` selector parameter shared by the page, fragment and chart routes
#[derive(Debug, Default, Deserialize)]
pub struct StateParams {
    #[serde(default)]
    pub state: Option<String>,
}

/// GET /api/v1/summary response
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub categories: Vec<CategoryCount>,
    pub payments: Vec<PaymentCount>,
    pub states: Vec<String>,
    pub default_state: Option<String>,
    pub totals: Totals,
}

/// Headline counts
#[derive(Debug, Serialize)]
pub struct Totals {
    pub order_items: usize,
    pub distinct_orders: usize,
    pub distinct_products: usize,
    pub customer_locations: usize,
    pub cities: usize,
}

/// Row counts per loaded table
#[derive(Debug, Serialize)]
pub struct TableCounts {
    pub order_items: usize,
    pub customer_locations: usize,
    pub city_orders: usize,
    pub state_categories: usize,
}

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    pub tables: TableCounts,
    /// Boundary provider in use ("none" when markers only)
    pub boundaries: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub version: String,
}
