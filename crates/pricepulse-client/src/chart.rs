//! Chart-data derivation for the price-history view
//!
//! Pure transformation from a price-history series to label/value vectors.
//! Rendering (the SVG path and its smoothing) lives in the frontend crate.

use chrono::{DateTime, NaiveDateTime};

use crate::types::PricePoint;

/// Chart-ready series: one label and one value per input point, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Derive the chart series from a price-history sequence.
///
/// Order is preserved exactly as the service returned it; no sorting,
/// de-duplication, or gap filling. An empty input yields an empty series.
pub fn derive_series(history: &[PricePoint]) -> ChartSeries {
    ChartSeries {
        labels: history
            .iter()
            .map(|point| format_date(&point.timestamp))
            .collect(),
        values: history.iter().map(|point| point.price).collect(),
    }
}

/// Render a timestamp as a short date, e.g. "Jan 5, 2024".
///
/// Unparseable input (including the empty string) passes through verbatim.
pub fn format_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(parsed) => parsed.format("%b %-d, %Y").to_string(),
        None => timestamp.to_string(),
    }
}

/// Render a timestamp with time of day, e.g. "Jan 5, 2024 14:30"
pub fn format_date_time(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(parsed) => parsed.format("%b %-d, %Y %H:%M").to_string(),
        None => timestamp.to_string(),
    }
}

fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(with_offset.naive_utc());
    }
    // The service also emits naive ISO-8601 timestamps
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Padded y-axis bounds from the observed values; deliberately not
/// zero-based, so small price deltas stay readable against large absolute
/// prices. Returns `None` for an empty series.
pub fn value_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    let (min, max) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = max - min;
    let padding = if span == 0.0 {
        (max.abs() * 0.05).max(1.0)
    } else {
        span * 0.1
    };
    Some((min - padding, max + padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(price: f64, timestamp: &str) -> PricePoint {
        PricePoint {
            price,
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn empty_history_yields_empty_series() {
        let series = derive_series(&[]);
        assert!(series.labels.is_empty());
        assert!(series.values.is_empty());
    }

    #[test]
    fn series_preserves_order_and_values() {
        let history = vec![
            point(100.0, "2024-01-01T00:00:00Z"),
            point(90.0, "2024-01-05T00:00:00Z"),
        ];
        let series = derive_series(&history);
        assert_eq!(series.values, vec![100.0, 90.0]);
        assert_eq!(
            series.labels,
            vec!["Jan 1, 2024".to_string(), "Jan 5, 2024".to_string()]
        );
    }

    #[test]
    fn series_keeps_duplicates_and_unsorted_input() {
        let history = vec![
            point(90.0, "2024-01-05T00:00:00Z"),
            point(90.0, "2024-01-05T00:00:00Z"),
            point(100.0, "2024-01-01T00:00:00Z"),
        ];
        let series = derive_series(&history);
        assert_eq!(series.values, vec![90.0, 90.0, 100.0]);
        assert_eq!(series.labels[0], series.labels[1]);
        assert_eq!(series.labels[2], "Jan 1, 2024");
    }

    #[test]
    fn naive_timestamps_format_like_the_service_emits_them() {
        assert_eq!(format_date("2024-01-04T00:00:00"), "Jan 4, 2024");
        assert_eq!(format_date("2024-01-04T10:30:00.123456"), "Jan 4, 2024");
    }

    #[test]
    fn offset_timestamps_format_in_utc() {
        assert_eq!(format_date("2024-01-05T01:00:00+05:30"), "Jan 4, 2024");
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date_time(""), "");
    }

    #[test]
    fn date_time_includes_time_of_day() {
        assert_eq!(
            format_date_time("2024-01-05T14:30:00"),
            "Jan 5, 2024 14:30"
        );
    }

    #[test]
    fn bounds_hug_the_data_instead_of_zero() {
        let (lo, hi) = value_bounds(&[11999.0, 12499.0, 13999.0]).unwrap();
        assert!(lo > 0.0);
        assert!(lo < 11999.0);
        assert!(hi > 13999.0);
    }

    #[test]
    fn bounds_of_flat_series_still_have_span() {
        let (lo, hi) = value_bounds(&[100.0, 100.0]).unwrap();
        assert!(lo < 100.0);
        assert!(hi > 100.0);
    }

    #[test]
    fn bounds_of_empty_series_are_none() {
        assert_eq!(value_bounds(&[]), None);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::types::PricePoint;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn series_matches_input_point_for_point(
            prices in proptest::collection::vec(-1e9f64..1e9, 0..50)
        ) {
            let history: Vec<PricePoint> = prices
                .iter()
                .enumerate()
                .map(|(i, &price)| PricePoint {
                    price,
                    timestamp: format!("2024-01-{:02}T00:00:00", (i % 27) + 1),
                })
                .collect();
            let series = derive_series(&history);
            prop_assert_eq!(series.labels.len(), history.len());
            prop_assert_eq!(series.values, prices);
        }

        #[test]
        fn bounds_contain_every_value(
            values in proptest::collection::vec(-1e6f64..1e6, 1..40)
        ) {
            let (lo, hi) = value_bounds(&values).unwrap();
            prop_assert!(lo < hi);
            for &value in &values {
                prop_assert!(lo <= value && value <= hi);
            }
        }
    }
}
