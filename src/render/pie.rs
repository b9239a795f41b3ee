//! Payment method donut chart

use serde::Serialize;
use std::f64::consts::PI;

use super::svg::{Anchor, Canvas};
use super::Figure;
use crate::data::PaymentCount;

pub const SLICE_COLORS: [&str; 5] = ["#ff9999", "#66b3ff", "#99ff99", "#ffcc99", "#c2c2f0"];

/// First slice starts here, measured counter-clockwise from 3 o'clock
const START_ANGLE_DEG: f64 = 140.0;
/// Percentage labels sit at this fraction of the radius
const LABEL_DISTANCE: f64 = 0.85;
/// White centre circle radius as a fraction of the outer radius
const HOLE_RATIO: f64 = 0.5;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 480;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: u64,
    /// Share of the total, 0-100
    pub percent: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieChart {
    pub slices: Vec<Slice>,
}

impl PieChart {
    /// `None` when the values sum to zero
    pub fn new(entries: Vec<(String, u64)>) -> Option<Self> {
        let total: u64 = entries.iter().map(|(_, v)| *v).sum();
        if total == 0 {
            return None;
        }

        let slices = entries
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| Slice {
                label,
                value,
                percent: value as f64 * 100.0 / total as f64,
                color: SLICE_COLORS[i % SLICE_COLORS.len()],
            })
            .collect();

        Some(Self { slices })
    }

    pub fn total_percent(&self) -> f64 {
        self.slices.iter().map(|s| s.percent).sum()
    }

    pub fn to_svg(&self) -> String {
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        let cx = 300.0;
        let cy = canvas.height() / 2.0;
        let r = 200.0;

        let point = |angle_deg: f64, radius: f64| {
            let a = angle_deg * PI / 180.0;
            (cx + radius * a.cos(), cy - radius * a.sin())
        };

        let mut start = START_ANGLE_DEG;
        for slice in &self.slices {
            let sweep = slice.percent * 3.6;
            if sweep >= 359.999 {
                canvas.circle(cx, cy, r, slice.color, 1.0);
            } else if sweep > 0.0 {
                let (x0, y0) = point(start, r);
                let (x1, y1) = point(start + sweep, r);
                let large_arc = if sweep > 180.0 { 1 } else { 0 };
                // sweep-flag 0 draws counter-clockwise on screen
                let d = format!(
                    "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
                    cx, cy, x0, y0, r, r, large_arc, x1, y1
                );
                canvas.path(&d, slice.color, "#ffffff");
            }

            let (lx, ly) = point(start + sweep / 2.0, r * LABEL_DISTANCE);
            canvas.text(lx, ly + 4.0, &format!("{:.1}%", slice.percent), 12, Anchor::Middle);
            start += sweep;
        }

        canvas.circle(cx, cy, r * HOLE_RATIO, "#ffffff", 1.0);

        // Legend
        let legend_x = 560.0;
        let mut legend_y = 60.0;
        for slice in &self.slices {
            canvas.rect(legend_x, legend_y - 10.0, 14.0, 14.0, slice.color);
            canvas.text(legend_x + 22.0, legend_y + 2.0, &slice.label, 13, Anchor::Start);
            legend_y += 24.0;
        }

        canvas.finish()
    }
}

/// One slice per payment type, in table order
pub fn payment_methods(counts: &[PaymentCount]) -> Figure {
    let entries = counts
        .iter()
        .map(|c| (c.payment_type.clone(), c.orders))
        .collect();

    match PieChart::new(entries) {
        Some(chart) => Figure::Pie(chart),
        None => Figure::no_data("No payment data"),
    }
}
