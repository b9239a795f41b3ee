//! Customer distribution map
//!
//! Country outline from a [`BoundaryProvider`], then one translucent marker per
//! customer location: area proportional to the customer count, fill from a
//! magma-like colormap, and a `"State (count)"` label beside each point.

use serde::Serialize;
use std::f64::consts::PI;

use super::boundary::{BoundaryProvider, Polygon};
use super::svg::{Anchor, Canvas, Rgb, AXIS_COLOR};
use super::Figure;
use crate::data::CustomerLocation;

/// Marker area (px²) is `customers / MARKER_SIZE_DIVISOR`
pub const MARKER_SIZE_DIVISOR: f64 = 4.0;
pub const MARKER_OPACITY: f64 = 0.4;
pub const OUTLINE_FILL: &str = "#1f77b4";
/// Label offset from the marker centre, in pixels
const LABEL_OFFSET: (f64, f64) = (3.0, 3.0);
const MIN_RADIUS: f64 = 2.0;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 720;
const MARGIN: f64 = 30.0;
const COLORBAR_WIDTH: f64 = 90.0;

const MAGMA: [Rgb; 5] = [
    Rgb(0x00, 0x00, 0x04),
    Rgb(0x3b, 0x0f, 0x70),
    Rgb(0x8c, 0x29, 0x81),
    Rgb(0xde, 0x49, 0x68),
    Rgb(0xfc, 0xfd, 0xbf),
];

/// Sample the colormap at `t` in `[0, 1]`
pub fn magma(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (MAGMA.len() - 1) as f64;
    let index = (scaled.floor() as usize).min(MAGMA.len() - 2);
    MAGMA[index].lerp(MAGMA[index + 1], scaled - index as f64)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub lng: f64,
    pub lat: f64,
    pub customers: u64,
    pub label: String,
    pub radius: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerMap {
    pub country: String,
    pub outline: Vec<Polygon>,
    pub markers: Vec<Marker>,
    pub count_range: (u64, u64),
}

/// Geographic bounds as (min_lng, min_lat, max_lng, max_lat)
type Bounds = (f64, f64, f64, f64);

impl MarkerMap {
    pub fn new(country: impl Into<String>, outline: Vec<Polygon>, locations: &[CustomerLocation]) -> Self {
        let min = locations.iter().map(|l| l.customers).min().unwrap_or(0);
        let max = locations.iter().map(|l| l.customers).max().unwrap_or(0);

        let markers = locations
            .iter()
            .map(|location| {
                let t = if max > min {
                    (location.customers - min) as f64 / (max - min) as f64
                } else {
                    0.5
                };
                Marker {
                    lng: location.lng,
                    lat: location.lat,
                    customers: location.customers,
                    label: format!("{} ({})", location.display_state(), location.customers),
                    radius: marker_radius(location.customers),
                    color: magma(t).to_hex(),
                }
            })
            .collect();

        Self {
            country: country.into(),
            outline,
            markers,
            count_range: (min, max),
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        let points = self
            .outline
            .iter()
            .flat_map(|p| p.exterior.iter().copied())
            .chain(self.markers.iter().map(|m| (m.lng, m.lat)));

        points.fold(None, |acc, (lng, lat)| match acc {
            None => Some((lng, lat, lng, lat)),
            Some((x0, y0, x1, y1)) => Some((x0.min(lng), y0.min(lat), x1.max(lng), y1.max(lat))),
        })
    }

    pub fn to_svg(&self) -> String {
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        let plot_w = canvas.width() - 2.0 * MARGIN - COLORBAR_WIDTH;
        let plot_h = canvas.height() - 2.0 * MARGIN;

        if let Some(bounds) = self.bounds() {
            let projection = Projection::fit(bounds, plot_w, plot_h);

            for polygon in &self.outline {
                let d = polygon
                    .rings()
                    .map(|ring| ring_path(ring, &projection))
                    .collect::<Vec<_>>()
                    .join(" ");
                canvas.path(&d, OUTLINE_FILL, "#ffffff");
            }

            for marker in &self.markers {
                let (x, y) = projection.apply(marker.lng, marker.lat);
                canvas.circle(x, y, marker.radius, &marker.color, MARKER_OPACITY);
            }

            // Labels after all markers so none is hidden under a later circle
            for marker in &self.markers {
                let (x, y) = projection.apply(marker.lng, marker.lat);
                canvas.text(x + LABEL_OFFSET.0, y - LABEL_OFFSET.1, &marker.label, 11, Anchor::Start);
            }
        }

        self.draw_colorbar(&mut canvas);
        canvas.finish()
    }

    fn draw_colorbar(&self, canvas: &mut Canvas) {
        let x = canvas.width() - COLORBAR_WIDTH + 10.0;
        let top = MARGIN + 40.0;
        let height = canvas.height() - 2.0 * MARGIN - 80.0;

        let stops: Vec<String> = (0..=10).map(|i| magma(i as f64 / 10.0).to_hex()).collect();
        canvas.vertical_gradient("customer-colormap", &stops);
        canvas.gradient_rect(x, top, 18.0, height, "customer-colormap");

        let (min, max) = self.count_range;
        canvas.text(x + 24.0, top + 4.0, &max.to_string(), 11, Anchor::Start);
        canvas.text(x + 24.0, top + height + 4.0, &min.to_string(), 11, Anchor::Start);
        canvas.line(x, top + height + 12.0, x + 18.0, top + height + 12.0, AXIS_COLOR);
        canvas.text(x + 9.0, top - 12.0, "Customers", 11, Anchor::Middle);
    }
}

/// Radius for a marker whose area is `customers / MARKER_SIZE_DIVISOR`
pub fn marker_radius(customers: u64) -> f64 {
    (customers as f64 / MARKER_SIZE_DIVISOR / PI).sqrt().max(MIN_RADIUS)
}

/// Equirectangular projection fitted to the plot area, preserving aspect ratio
struct Projection {
    min_lng: f64,
    max_lat: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Projection {
    fn fit((min_lng, min_lat, max_lng, max_lat): Bounds, width: f64, height: f64) -> Self {
        let pad_lng = ((max_lng - min_lng) * 0.05).max(1.0);
        let pad_lat = ((max_lat - min_lat) * 0.05).max(1.0);
        let (min_lng, max_lng) = (min_lng - pad_lng, max_lng + pad_lng);
        let (min_lat, max_lat) = (min_lat - pad_lat, max_lat + pad_lat);

        let scale = (width / (max_lng - min_lng)).min(height / (max_lat - min_lat));
        Self {
            min_lng,
            max_lat,
            scale,
            offset_x: MARGIN + (width - (max_lng - min_lng) * scale) / 2.0,
            offset_y: MARGIN + (height - (max_lat - min_lat) * scale) / 2.0,
        }
    }

    fn apply(&self, lng: f64, lat: f64) -> (f64, f64) {
        (
            self.offset_x + (lng - self.min_lng) * self.scale,
            self.offset_y + (self.max_lat - lat) * self.scale,
        )
    }
}

fn ring_path(ring: &[(f64, f64)], projection: &Projection) -> String {
    let mut d = String::new();
    for (i, (lng, lat)) in ring.iter().enumerate() {
        let (x, y) = projection.apply(*lng, *lat);
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{} {:.1} {:.1} ", cmd, x, y));
    }
    d.push('Z');
    d
}

/// Customer markers over the outline of `country`
pub fn customer_distribution(
    locations: &[CustomerLocation],
    boundaries: &dyn BoundaryProvider,
    country: &str,
) -> Figure {
    if locations.is_empty() {
        return Figure::no_data("No customer location data");
    }

    let outline = boundaries.outline(country);
    if outline.is_empty() {
        tracing::debug!(country, provider = boundaries.name(), "No outline for country");
    }

    Figure::Map(MarkerMap::new(country, outline, locations))
}
