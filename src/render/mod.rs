//! Chart renderers
//!
//! Every renderer is a pure function from one table (plus an optional filter)
//! to a [`Figure`]. Figures are plain data until `to_svg` serializes them, so
//! tests can assert on bars, slices and markers directly.
//!
//! - **bar**: top/bottom categories, top category per state, top cities
//! - **pie**: payment method donut
//! - **map**: customer distribution markers
//! - **boundary**: injected country outline providers
//! - **svg**: shared SVG writer

pub mod bar;
pub mod boundary;
pub mod map;
pub mod pie;
pub mod svg;

pub use bar::{bottom_categories, category_in_state, top_categories, top_cities, Bar, BarChart};
pub use boundary::{
    BoundaryError, BoundaryProvider, GeoJsonBoundaries, NoBoundaries, Polygon, SharedBoundaries,
};
pub use map::{customer_distribution, Marker, MarkerMap};
pub use pie::{payment_methods, PieChart, Slice};

use svg::{Anchor, Canvas};

/// One rendered chart panel
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Bar(BarChart),
    Pie(PieChart),
    Map(MarkerMap),
    /// Nothing to plot; the message is shown in place of the chart
    NoData(String),
}

impl Figure {
    pub fn no_data(message: impl Into<String>) -> Self {
        Figure::NoData(message.into())
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Figure::NoData(_))
    }

    /// Standalone SVG document
    pub fn to_svg(&self) -> String {
        match self {
            Figure::Bar(chart) => chart.to_svg(),
            Figure::Pie(chart) => chart.to_svg(),
            Figure::Map(map) => map.to_svg(),
            Figure::NoData(message) => {
                let mut canvas = Canvas::new(800, 200);
                canvas.rect(0.5, 0.5, 799.0, 199.0, "#f0f2f6");
                let (x, y) = (canvas.width() / 2.0, canvas.height() / 2.0);
                canvas.text(x, y + 5.0, message, 16, Anchor::Middle);
                canvas.finish()
            }
        }
    }
}
