//! Page Controller
//!
//! Owns the loaded tables and the derived aggregates, and sequences the
//! dashboard: title, sales by category, top category by state (the only
//! interactive section), payment methods, customer distribution, top cities.
//!
//! ```rust,no_run
//! use ecommerce_dashboard::data::{DataSources, Dataset};
//! use ecommerce_dashboard::page::Dashboard;
//! use ecommerce_dashboard::render::NoBoundaries;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load(&DataSources::from_dir("./main_data"))?;
//!     let dashboard = Dashboard::new(dataset, Arc::new(NoBoundaries), "Brazil");
//!     let html = dashboard.render_page(Some("Bahia"));
//!     std::fs::write("dashboard.html", html)?;
//!     Ok(())
//! }
//! ```

pub mod html;

use std::path::Path;
use std::sync::Arc;

use crate::analysis::{state_options, Summary};
use crate::config::{Config, MapConfig};
use crate::data::{DataError, Dataset};
use crate::render::{self, BoundaryError, Figure, GeoJsonBoundaries, NoBoundaries, SharedBoundaries};

/// The six chart panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    TopCategories,
    BottomCategories,
    CategoryByState,
    Payments,
    CustomersMap,
    TopCities,
}

impl ChartKind {
    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::TopCategories,
            ChartKind::BottomCategories,
            ChartKind::CategoryByState,
            ChartKind::Payments,
            ChartKind::CustomersMap,
            ChartKind::TopCities,
        ]
    }

    /// URL and file name stem
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::TopCategories => "top-categories",
            ChartKind::BottomCategories => "bottom-categories",
            ChartKind::CategoryByState => "category-by-state",
            ChartKind::Payments => "payments",
            ChartKind::CustomersMap => "customers-map",
            ChartKind::TopCities => "top-cities",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.slug() == slug)
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Errors assembling a dashboard from configuration
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Boundary error: {0}")]
    Boundary(#[from] BoundaryError),
}

/// Immutable dashboard model shared by every request
pub struct Dashboard {
    dataset: Dataset,
    summary: Summary,
    state_options: Vec<String>,
    boundaries: SharedBoundaries,
    country: String,
}

impl Dashboard {
    pub fn new(dataset: Dataset, boundaries: SharedBoundaries, country: impl Into<String>) -> Self {
        let summary = Summary::from_items(&dataset.order_items);
        let state_options = state_options(&dataset.state_categories);

        Self {
            dataset,
            summary,
            state_options,
            boundaries,
            country: country.into(),
        }
    }

    /// Load tables and boundaries as configured. Any failure is fatal.
    pub fn from_config(config: &Config) -> Result<Self, DashboardError> {
        let dataset = Dataset::load(&config.data.sources())?;
        let boundaries = load_boundaries(&config.map)?;

        let dashboard = Self::new(dataset, boundaries, &config.map.country);
        tracing::info!(
            categories = dashboard.summary.categories.len(),
            payment_types = dashboard.summary.payments.len(),
            states = dashboard.state_options.len(),
            boundaries = dashboard.boundaries.name(),
            "Dashboard ready"
        );
        Ok(dashboard)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn state_options(&self) -> &[String] {
        &self.state_options
    }

    pub fn boundaries_name(&self) -> &str {
        self.boundaries.name()
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// First option, i.e. the state holding the single largest category count
    pub fn default_state(&self) -> Option<&str> {
        self.state_options.first().map(String::as_str)
    }

    /// The requested state if one was given, else the default
    pub fn resolve_state<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        match requested.map(str::trim) {
            Some(state) if !state.is_empty() => Some(state),
            _ => self.default_state(),
        }
    }

    /// Render one panel; `state` only affects [`ChartKind::CategoryByState`]
    pub fn figure(&self, kind: ChartKind, state: Option<&str>) -> Figure {
        match kind {
            ChartKind::TopCategories => render::top_categories(&self.summary.categories),
            ChartKind::BottomCategories => render::bottom_categories(&self.summary.categories),
            ChartKind::CategoryByState => match self.resolve_state(state) {
                Some(state) => render::category_in_state(&self.dataset.state_categories, state),
                None => Figure::no_data("No state data"),
            },
            ChartKind::Payments => render::payment_methods(&self.summary.payments),
            ChartKind::CustomersMap => render::customer_distribution(
                &self.dataset.customer_locations,
                self.boundaries.as_ref(),
                &self.country,
            ),
            ChartKind::TopCities => render::top_cities(&self.dataset.city_orders),
        }
    }
}

/// Boundary provider for the map section: GeoJSON when configured, otherwise none
pub fn load_boundaries(config: &MapConfig) -> Result<SharedBoundaries, BoundaryError> {
    match config.boundaries.as_deref() {
        Some(path) => Ok(Arc::new(GeoJsonBoundaries::from_path(
            Path::new(path),
            &config.country_property,
        )?)),
        None => {
            tracing::info!("No boundary file configured, map shows markers only");
            Ok(Arc::new(NoBoundaries))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;

    pub(crate) fn sample_dashboard() -> Dashboard {
        Dashboard::new(sample_dataset(), Arc::new(NoBoundaries), "Brazil")
    }

    #[test]
    fn test_chart_slugs_round_trip() {
        for kind in ChartKind::all() {
            assert_eq!(ChartKind::from_slug(kind.slug()), Some(*kind));
        }
        assert_eq!(ChartKind::from_slug("nope"), None);
    }

    #[test]
    fn test_default_state_is_first_option() {
        let dashboard = sample_dashboard();
        assert_eq!(dashboard.default_state(), Some("São Paulo"));
        assert_eq!(dashboard.resolve_state(None), Some("São Paulo"));
        assert_eq!(dashboard.resolve_state(Some("  ")), Some("São Paulo"));
        assert_eq!(dashboard.resolve_state(Some("Bahia")), Some("Bahia"));
    }

    #[test]
    fn test_selecting_state_rerenders_filter() {
        let dashboard = sample_dashboard();

        match dashboard.figure(ChartKind::CategoryByState, Some("Bahia")) {
            Figure::Bar(chart) => assert_eq!(chart.bars.len(), 3),
            other => panic!("unexpected figure {:?}", other),
        }
        match dashboard.figure(ChartKind::CategoryByState, None) {
            Figure::Bar(chart) => assert_eq!(chart.labels(), vec!["electronics"]),
            other => panic!("unexpected figure {:?}", other),
        }
        assert!(dashboard
            .figure(ChartKind::CategoryByState, Some("Acre"))
            .is_no_data());
    }

    #[test]
    fn test_every_panel_renders() {
        let dashboard = sample_dashboard();
        for kind in ChartKind::all() {
            let figure = dashboard.figure(*kind, None);
            assert!(!figure.is_no_data(), "{} rendered no data", kind);
        }
    }

    #[test]
    fn test_empty_dataset_renders_no_data_everywhere() {
        let dashboard = Dashboard::new(Dataset::default(), Arc::new(NoBoundaries), "Brazil");
        assert_eq!(dashboard.default_state(), None);
        for kind in ChartKind::all() {
            assert!(dashboard.figure(*kind, None).is_no_data());
        }
    }

    #[test]
    fn test_load_boundaries_without_file() {
        let provider = load_boundaries(&MapConfig::default()).unwrap();
        assert_eq!(provider.name(), "none");
    }
}
