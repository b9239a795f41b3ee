//! # E-Commerce Dashboard
//!
//! Single-page dashboard over pre-aggregated marketplace CSV extracts:
//! best and worst selling product categories, top categories per state,
//! payment method shares, customer distribution on a map and the cities
//! placing the most orders.
//!
//! ## Modules
//!
//! - [`data`]: CSV loading into typed, immutable tables
//! - [`analysis`]: distinct-count aggregates, state lookup, row selection rules
//! - [`render`]: chart renderers producing SVG figures
//! - [`page`]: page controller assembling the dashboard HTML
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ecommerce_dashboard::data::{DataSources, Dataset};
//! use ecommerce_dashboard::page::{ChartKind, Dashboard};
//! use ecommerce_dashboard::render::NoBoundaries;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load(&DataSources::from_dir("./main_data"))?;
//!     let dashboard = Dashboard::new(dataset, Arc::new(NoBoundaries), "Brazil");
//!
//!     for category in dashboard.summary().categories.iter().take(3) {
//!         println!("{}: {}", category.category, category.products);
//!     }
//!
//!     let svg = dashboard.figure(ChartKind::Payments, None).to_svg();
//!     std::fs::write("payments.svg", svg)?;
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod data;
pub mod logging;
pub mod page;
pub mod render;

// Re-export top-level types for convenience
pub use data::{
    CategoryCount, CityOrderCount, CustomerLocation, DataError, DataResult, DataSources, Dataset,
    OrderItem, PaymentCount, StateCategoryCount,
};

pub use analysis::{category_counts, fallback_tier, payment_counts, state_name, Summary};

pub use render::{BoundaryError, BoundaryProvider, Figure, GeoJsonBoundaries, NoBoundaries};

pub use page::{ChartKind, Dashboard, DashboardError};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig};
