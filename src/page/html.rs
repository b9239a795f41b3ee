//! HTML page assembly
//!
//! Server-rendered page with charts inlined as SVG. The state selector submits
//! a plain GET form; with scripting enabled it instead fetches just the
//! per-state section and swaps it in place.

use chrono::Utc;
use std::fmt::Write;

use super::{ChartKind, Dashboard};
use crate::render::svg::escape;

pub const PAGE_TITLE: &str = "E-Commerce Public Dataset Dashboard";
pub const SALES_HEADER: &str = "Sales Performance by Product Category";
pub const TOP_CATEGORIES_HEADER: &str = "Best-Selling Product Categories";
pub const BOTTOM_CATEGORIES_HEADER: &str = "Least-Selling Product Categories";
pub const STATE_HEADER: &str = "Top Product Categories by State";
pub const PAYMENTS_HEADER: &str = "Payment Methods Used by Customers";
pub const CUSTOMERS_HEADER: &str = "Customer Distribution by State";
pub const CITIES_HEADER: &str = "Cities with the Most Orders";

/// Element id of the swappable per-state section body
pub const STATE_SECTION_ID: &str = "category-by-state";

const STYLE: &str = r#"
body { font-family: "Source Sans Pro", Helvetica, Arial, sans-serif; color: #262730; margin: 0; background: #ffffff; }
main { max-width: 1400px; margin: 0 auto; padding: 2rem 3rem; }
h1 { font-size: 2.2rem; margin-bottom: 1.5rem; }
h2 { font-size: 1.6rem; margin-top: 2.5rem; }
h4 { font-size: 1.1rem; }
.columns { display: flex; gap: 2rem; }
.columns > div { flex: 1; min-width: 0; }
figure { margin: 0; }
figure svg { width: 100%; height: auto; }
label { display: block; font-size: 0.9rem; margin-bottom: 0.4rem; }
select { font-size: 1rem; padding: 0.4rem; min-width: 18rem; }
footer { color: #808495; font-size: 0.8rem; margin-top: 3rem; }
"#;

const SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  var form = document.getElementById('state-form');
  var select = document.getElementById('state-select');
  if (!form || !select) { return; }
  form.querySelector('button').style.display = 'none';
  select.addEventListener('change', function () {
    var url = '/sections/category-by-state?state=' + encodeURIComponent(select.value);
    fetch(url).then(function (r) { return r.text(); }).then(function (html) {
      document.getElementById('category-by-state').innerHTML = html;
      history.replaceState(null, '', '/?state=' + encodeURIComponent(select.value));
    }).catch(function () { form.submit(); });
  });
});
"#;

impl Dashboard {
    /// Full dashboard page, sections in fixed order
    pub fn render_page(&self, selected_state: Option<&str>) -> String {
        let selected = self.resolve_state(selected_state);
        let mut out = String::with_capacity(256 * 1024);

        let _ = write!(
            out,
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title}</title><style>{STYLE}</style></head><body><main><h1>{title}</h1>"#,
            title = escape(PAGE_TITLE),
        );

        let _ = write!(out, "<section><h2>{}</h2><div class=\"columns\">", SALES_HEADER);
        let _ = write!(
            out,
            "<div><h4>{}</h4>{}</div>",
            TOP_CATEGORIES_HEADER,
            self.figure_html(ChartKind::TopCategories, None)
        );
        let _ = write!(
            out,
            "<div><h4>{}</h4>{}</div>",
            BOTTOM_CATEGORIES_HEADER,
            self.figure_html(ChartKind::BottomCategories, None)
        );
        out.push_str("</div></section>");

        let _ = write!(out, "<section><h2>{}</h2>", STATE_HEADER);
        out.push_str(&self.state_selector(selected));
        let _ = write!(
            out,
            r#"<div id="{}">{}</div></section>"#,
            STATE_SECTION_ID,
            self.render_state_section(selected)
        );

        self.push_section(&mut out, PAYMENTS_HEADER, ChartKind::Payments);
        self.push_section(&mut out, CUSTOMERS_HEADER, ChartKind::CustomersMap);
        self.push_section(&mut out, CITIES_HEADER, ChartKind::TopCities);

        let _ = write!(
            out,
            "<footer>Generated {} &middot; {} order items &middot; {} orders</footer></main><script>{}</script></body></html>",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            self.summary().order_items,
            self.summary().distinct_orders,
            SCRIPT
        );

        out
    }

    /// Body of the per-state section only
    pub fn render_state_section(&self, state: Option<&str>) -> String {
        let state = self.resolve_state(state);
        let caption = match state {
            Some(state) => format!("<h4>{}</h4>", escape(state)),
            None => String::new(),
        };
        format!("{}{}", caption, self.figure_html(ChartKind::CategoryByState, state))
    }

    fn push_section(&self, out: &mut String, header: &str, kind: ChartKind) {
        let _ = write!(
            out,
            "<section><h2>{}</h2>{}</section>",
            header,
            self.figure_html(kind, None)
        );
    }

    fn figure_html(&self, kind: ChartKind, state: Option<&str>) -> String {
        let figure = self.figure(kind, state);
        let class = if figure.is_no_data() { "no-data" } else { "chart" };
        format!(
            r#"<figure class="{}" data-chart="{}">{}</figure>"#,
            class,
            kind.slug(),
            figure.to_svg()
        )
    }

    fn state_selector(&self, selected: Option<&str>) -> String {
        let mut options = String::new();
        // A requested state outside the table still shows as the current choice
        let unlisted = selected.filter(|s| !self.state_options().iter().any(|o| o.as_str() == *s));
        if let Some(state) = unlisted {
            let _ = write!(
                options,
                r#"<option value="{value}" selected disabled>{value}</option>"#,
                value = escape(state)
            );
        }
        for state in self.state_options() {
            let marker = if Some(state.as_str()) == selected { " selected" } else { "" };
            let _ = write!(
                options,
                r#"<option value="{value}"{marker}>{value}</option>"#,
                value = escape(state),
                marker = marker
            );
        }

        let permalink = selected
            .map(|s| format!("/?state={}", urlencoding::encode(s)))
            .unwrap_or_else(|| "/".to_string());

        format!(
            r#"<form id="state-form" method="get" action="/"><label for="state-select">Select state</label><select id="state-select" name="state">{}</select> <button type="submit">Show</button> <a href="{}">link</a></form>"#,
            options,
            escape(&permalink)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::tests::sample_dashboard;

    #[test]
    fn test_sections_in_order() {
        let html = sample_dashboard().render_page(None);

        let positions: Vec<usize> = [
            PAGE_TITLE,
            SALES_HEADER,
            TOP_CATEGORIES_HEADER,
            BOTTOM_CATEGORIES_HEADER,
            STATE_HEADER,
            PAYMENTS_HEADER,
            CUSTOMERS_HEADER,
            CITIES_HEADER,
        ]
        .iter()
        .map(|header| html.find(header).unwrap_or_else(|| panic!("missing {}", header)))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<figure").count(), 6);
    }

    #[test]
    fn test_selector_lists_states_and_marks_default() {
        let html = sample_dashboard().render_page(None);

        assert!(html.contains(r#"<option value="São Paulo" selected>São Paulo</option>"#));
        assert!(html.contains(r#"<option value="Bahia">Bahia</option>"#));
        assert!(html.contains("/?state=S%C3%A3o%20Paulo"));
    }

    #[test]
    fn test_selected_state_drives_section() {
        let html = sample_dashboard().render_page(Some("Bahia"));

        assert!(html.contains(r#"<option value="Bahia" selected>"#));
        assert!(html.contains("garden_tools"));
    }

    #[test]
    fn test_state_section_without_rows() {
        let section = sample_dashboard().render_state_section(Some("Amapá"));

        assert!(section.contains("No data for Amapá"));
        assert!(section.contains(r#"class="no-data""#));
    }

    #[test]
    fn test_unlisted_state_is_shown_as_selected() {
        let html = sample_dashboard().render_page(Some("Nowhere"));

        assert!(html.contains(r#"<option value="Nowhere" selected disabled>Nowhere</option>"#));
        assert!(html.contains(r#"<option value="São Paulo">São Paulo</option>"#));
        assert_eq!(html.matches(" selected").count(), 1);
        assert!(html.contains("No data for Nowhere"));
    }

    #[test]
    fn test_state_names_are_escaped() {
        let section = sample_dashboard().render_state_section(Some("<script>"));
        assert!(!section.contains("<script>"));
        assert!(section.contains("&lt;script&gt;"));
    }
}
