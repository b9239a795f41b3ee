//! Bar chart renderers
//!
//! Top/bottom categories, top category per state and top cities share one
//! vertical bar layout: neutral grey bars, accented extremes, a count label
//! above every bar and category labels rotated 45 degrees.

use serde::Serialize;

use super::svg::{nice_step, Anchor, Canvas, AXIS_COLOR, GRID_COLOR};
use super::Figure;
use crate::analysis::{bottom_n, highlight_mask, rows_for_state, top_n, Extreme, WINDOW_SIZE};
use crate::data::{CategoryCount, CityOrderCount, StateCategoryCount};

pub const NEUTRAL_COLOR: &str = "#808080";
pub const MAX_ACCENT: &str = "#1f77b4";
pub const MIN_ACCENT: &str = "#d62728";

const WIDTH: u32 = 800;
const HEIGHT: u32 = 480;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 150.0;

/// One bar
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub highlighted: bool,
}

/// A labelled vertical bar chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChart {
    pub x_label: String,
    pub y_label: String,
    pub accent: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Build from label/value pairs, accenting every value equal to `extreme`
    pub fn new(
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        entries: Vec<(String, u64)>,
        extreme: Extreme,
    ) -> Self {
        let values: Vec<u64> = entries.iter().map(|(_, v)| *v).collect();
        let mask = highlight_mask(&values, extreme);
        let bars = entries
            .into_iter()
            .zip(mask)
            .map(|((label, value), highlighted)| Bar {
                label,
                value,
                highlighted,
            })
            .collect();

        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            accent: match extreme {
                Extreme::Max => MAX_ACCENT,
                Extreme::Min => MIN_ACCENT,
            },
            bars,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn highlighted(&self) -> Vec<&Bar> {
        self.bars.iter().filter(|b| b.highlighted).collect()
    }

    pub fn to_svg(&self) -> String {
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        let plot_w = canvas.width() - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = canvas.height() - MARGIN_TOP - MARGIN_BOTTOM;
        let base_y = MARGIN_TOP + plot_h;

        let max_value = self.bars.iter().map(|b| b.value).max().unwrap_or(0) as f64;
        let step = nice_step(max_value * 1.1, 5);
        let axis_max = ((max_value * 1.1) / step).ceil().max(1.0) * step;
        let scale = plot_h / axis_max;

        // Y grid and ticks
        let mut tick = 0.0;
        while tick <= axis_max {
            let y = base_y - tick * scale;
            canvas.line(MARGIN_LEFT, y, MARGIN_LEFT + plot_w, y, GRID_COLOR);
            canvas.text(MARGIN_LEFT - 6.0, y + 4.0, &format!("{}", tick as u64), 11, Anchor::End);
            tick += step;
        }

        let slot = plot_w / self.bars.len().max(1) as f64;
        let bar_w = slot * 0.8;
        for (i, bar) in self.bars.iter().enumerate() {
            let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_w) / 2.0;
            let h = bar.value as f64 * scale;
            let fill = if bar.highlighted { self.accent } else { NEUTRAL_COLOR };
            canvas.rect(x, base_y - h, bar_w, h, fill);

            let center = x + bar_w / 2.0;
            canvas.text(center, base_y - h - 4.0, &bar.value.to_string(), 11, Anchor::Middle);
            canvas.rotated_text(center, base_y + 14.0, &bar.label, 11, Anchor::End, -45.0);
        }

        canvas.line(MARGIN_LEFT, base_y, MARGIN_LEFT + plot_w, base_y, AXIS_COLOR);
        canvas.line(MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, base_y, AXIS_COLOR);

        canvas.text(
            MARGIN_LEFT + plot_w / 2.0,
            canvas.height() - 10.0,
            &self.x_label,
            13,
            Anchor::Middle,
        );
        canvas.rotated_text(
            18.0,
            MARGIN_TOP + plot_h / 2.0,
            &self.y_label,
            13,
            Anchor::Middle,
            -90.0,
        );

        canvas.finish()
    }
}

fn category_entries(rows: &[CategoryCount]) -> Vec<(String, u64)> {
    rows.iter().map(|r| (r.category.clone(), r.products)).collect()
}

/// Ten best-selling categories, maximum accented
pub fn top_categories(counts: &[CategoryCount]) -> Figure {
    let rows = top_n(counts, WINDOW_SIZE);
    if rows.is_empty() {
        return Figure::no_data("No product category data");
    }
    Figure::Bar(BarChart::new(
        "Product category",
        "Product count",
        category_entries(rows),
        Extreme::Max,
    ))
}

/// Ten least-selling categories, minimum accented
pub fn bottom_categories(counts: &[CategoryCount]) -> Figure {
    let rows = bottom_n(counts, WINDOW_SIZE);
    if rows.is_empty() {
        return Figure::no_data("No product category data");
    }
    Figure::Bar(BarChart::new(
        "Product category",
        "Product count",
        category_entries(rows),
        Extreme::Min,
    ))
}

/// Best categories within one state, trimmed to the 5/3/1 fallback tier
pub fn category_in_state(table: &[StateCategoryCount], state: &str) -> Figure {
    let rows = rows_for_state(table, state);
    if rows.is_empty() {
        tracing::debug!(state, "No category rows for state");
        return Figure::no_data(format!("No data for {}", state));
    }
    Figure::Bar(BarChart::new(
        "Product category",
        "Product count",
        rows.iter().map(|r| (r.category.clone(), r.products)).collect(),
        Extreme::Max,
    ))
}

/// Ten cities with the most orders, maximum accented
pub fn top_cities(cities: &[CityOrderCount]) -> Figure {
    let rows = top_n(cities, WINDOW_SIZE);
    if rows.is_empty() {
        return Figure::no_data("No city order data");
    }
    Figure::Bar(BarChart::new(
        "City",
        "Order count",
        rows.iter().map(|r| (r.city.clone(), r.orders)).collect(),
        Extreme::Max,
    ))
}
