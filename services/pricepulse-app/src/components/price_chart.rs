//! SVG line chart for the price-history series
//!
//! The markup is built as a string, mirroring how the series data is pure:
//! everything here is deterministic string construction over the derived
//! labels and values.

use leptos::prelude::*;

use pricepulse_client::chart::{value_bounds, ChartSeries};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;

const Y_TICKS: usize = 5;
const MAX_X_LABELS: usize = 8;

/// Curve smoothing factor; purely visual, the data values are untouched
const TENSION: f64 = 0.1;

const LINE_COLOR: &str = "rgb(75, 192, 192)";

/// Line chart of the derived price series
#[component]
pub fn PriceChart(series: ChartSeries) -> impl IntoView {
    let body = if series.values.is_empty() {
        view! { <p style="color: #555;">"No price history yet."</p> }.into_any()
    } else {
        view! { <div inner_html=render_svg(&series)></div> }.into_any()
    };

    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1.5rem;">
            <h2 style="margin-top: 0;">"Price History"</h2>
            {body}
        </div>
    }
}

/// Render the full chart SVG for a non-empty series
fn render_svg(series: &ChartSeries) -> String {
    let Some(bounds) = value_bounds(&series.values) else {
        return String::new();
    };

    let points = plot_points(&series.values, bounds);
    let mut svg = format!(
        r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" style="width: 100%; height: auto;" xmlns="http://www.w3.org/2000/svg">"#
    );

    for tick in y_ticks(bounds) {
        let y = value_to_y(tick, bounds);
        svg.push_str(&format!(
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="#eee"/>"##,
            x2 = WIDTH - MARGIN_RIGHT,
        ));
        svg.push_str(&format!(
            r##"<text x="{x}" y="{y:.1}" text-anchor="end" dominant-baseline="middle" font-size="11" fill="#777">{tick:.0}</text>"##,
            x = MARGIN_LEFT - 8.0,
        ));
    }

    svg.push_str(&format!(
        r##"<text transform="rotate(-90 14 {mid:.1})" x="14" y="{mid:.1}" text-anchor="middle" font-size="12" fill="#555">Price (₹)</text>"##,
        mid = HEIGHT / 2.0,
    ));

    svg.push_str(&format!(
        r#"<path d="{d}" fill="none" stroke="{LINE_COLOR}" stroke-width="2"/>"#,
        d = smooth_path(&points),
    ));

    for &(x, y) in &points {
        svg.push_str(&format!(
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="3" fill="{LINE_COLOR}"/>"#
        ));
    }

    let step = label_step(series.labels.len());
    for (i, label) in series.labels.iter().enumerate() {
        if i % step != 0 {
            continue;
        }
        let (x, _) = points[i];
        svg.push_str(&format!(
            r##"<text x="{x:.1}" y="{y}" text-anchor="middle" font-size="11" fill="#777">{text}</text>"##,
            y = HEIGHT - MARGIN_BOTTOM + 20.0,
            text = xml_escape(label),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Map values onto chart coordinates, in input order
fn plot_points(values: &[f64], bounds: (f64, f64)) -> Vec<(f64, f64)> {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if values.len() < 2 {
                MARGIN_LEFT + plot_width / 2.0
            } else {
                MARGIN_LEFT + plot_width * i as f64 / (values.len() - 1) as f64
            };
            (x, value_to_y(value, bounds))
        })
        .collect()
}

fn value_to_y(value: f64, (lo, hi): (f64, f64)) -> f64 {
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    MARGIN_TOP + plot_height * (1.0 - (value - lo) / (hi - lo))
}

/// Cubic path through the points with a fixed interpolation tension
fn smooth_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            path.push_str(&format!("M {x:.1} {y:.1}"));
            continue;
        }
        let prev = points[i - 1];
        let before = if i >= 2 { points[i - 2] } else { prev };
        let next = if i + 1 < points.len() { points[i + 1] } else { (x, y) };
        let c1 = (
            prev.0 + (x - before.0) * TENSION,
            prev.1 + (y - before.1) * TENSION,
        );
        let c2 = (
            x - (next.0 - prev.0) * TENSION,
            y - (next.1 - prev.1) * TENSION,
        );
        path.push_str(&format!(
            " C {:.1} {:.1}, {:.1} {:.1}, {x:.1} {y:.1}",
            c1.0, c1.1, c2.0, c2.1,
        ));
    }
    path
}

/// Evenly spaced y-axis tick values across the padded bounds
fn y_ticks((lo, hi): (f64, f64)) -> Vec<f64> {
    (0..Y_TICKS)
        .map(|i| lo + (hi - lo) * i as f64 / (Y_TICKS - 1) as f64)
        .collect()
}

/// Label every nth point so long series stay readable
fn label_step(count: usize) -> usize {
    count.div_ceil(MAX_X_LABELS).max(1)
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
