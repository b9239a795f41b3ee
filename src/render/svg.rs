//! SVG building blocks
//!
//! A minimal element writer shared by all renderers. Output is a standalone
//! `<svg>` document that can be inlined into HTML or served as `image/svg+xml`.

use std::fmt::Write;

pub const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";
pub const AXIS_COLOR: &str = "#333333";
pub const GRID_COLOR: &str = "#e5e7eb";
pub const TEXT_COLOR: &str = "#262730";

/// Escape text for use in SVG/HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Accumulates SVG elements for one figure
pub struct Canvas {
    width: u32,
    height: u32,
    defs: String,
    body: String,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            defs: String::new(),
            body: String::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width as f64
    }

    pub fn height(&self) -> f64 {
        self.height as f64
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        let _ = write!(
            self.body,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, width, height, fill
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        let _ = write!(
            self.body,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
            x1, y1, x2, y2, stroke
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, opacity: f64) {
        let _ = write!(
            self.body,
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" fill-opacity="{:.2}"/>"#,
            cx, cy, r, fill, opacity
        );
    }

    /// Filled path; `d` is raw path data
    pub fn path(&mut self, d: &str, fill: &str, stroke: &str) {
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="0.8" fill-rule="evenodd"/>"#,
            d, fill, stroke
        );
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, size: u32, anchor: Anchor) {
        let _ = write!(
            self.body,
            r#"<text x="{:.1}" y="{:.1}" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
            x,
            y,
            size,
            anchor.as_str(),
            TEXT_COLOR,
            escape(content)
        );
    }

    /// Text rotated by `degrees` around its anchor point
    pub fn rotated_text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: u32,
        anchor: Anchor,
        degrees: f64,
    ) {
        let _ = write!(
            self.body,
            r#"<text x="{x:.1}" y="{y:.1}" font-size="{}" text-anchor="{}" fill="{}" transform="rotate({degrees:.0}, {x:.1}, {y:.1})">{}</text>"#,
            size,
            anchor.as_str(),
            TEXT_COLOR,
            escape(content)
        );
    }

    /// Vertical gradient with evenly spaced stops, bottom to top
    pub fn vertical_gradient(&mut self, id: &str, colors: &[String]) {
        let _ = write!(
            self.defs,
            r#"<linearGradient id="{}" x1="0" y1="1" x2="0" y2="0">"#,
            id
        );
        let last = colors.len().saturating_sub(1).max(1) as f64;
        for (i, color) in colors.iter().enumerate() {
            let _ = write!(
                self.defs,
                r#"<stop offset="{:.3}" stop-color="{}"/>"#,
                i as f64 / last,
                color
            );
        }
        self.defs.push_str("</linearGradient>");
    }

    pub fn gradient_rect(&mut self, x: f64, y: f64, width: f64, height: f64, id: &str) {
        let _ = write!(
            self.body,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="url(#{})" stroke="{}"/>"#,
            x, y, width, height, id, AXIS_COLOR
        );
    }

    /// Close the document
    pub fn finish(self) -> String {
        let defs = if self.defs.is_empty() {
            String::new()
        } else {
            format!("<defs>{}</defs>", self.defs)
        };

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}"><rect width="100%" height="100%" fill="#ffffff"/>{defs}{body}</svg>"##,
            w = self.width,
            h = self.height,
            font = FONT_FAMILY,
            defs = defs,
            body = self.body,
        )
    }
}

/// RGB color used for interpolated colormaps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Step for roughly `target` axis ticks spanning `0..=max`, rounded to 1/2/5 × 10^k
pub fn nice_step(max: f64, target: usize) -> f64 {
    if max <= 0.0 || target == 0 {
        return 1.0;
    }
    let raw = max / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    (nice * magnitude).max(1.0)
}
