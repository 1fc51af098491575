//! Property tests for price series -> plot geometry.
//!
//! - every sample lies between the reported min and max
//! - fewer than two samples never produce a path
//! - plotted points stay inside the padded box and are never NaN
//! - hover sampling snaps back to the sample under each plotted point

use coin_vault::{PlotDimensions, PricePoint, compute_series_geometry};
use proptest::prelude::*;

fn arb_prices(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1_000_000.0, 0..max_len)
}

fn arb_dims() -> impl Strategy<Value = PlotDimensions> {
    (20.0f64..600.0, 20.0f64..300.0, 0.0f64..8.0)
        .prop_map(|(w, h, p)| PlotDimensions::new(w, h, p).unwrap())
}

fn to_points(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, p)| PricePoint::new(i as i64 * 3_600_000, *p))
        .collect()
}

proptest! {
    #[test]
    fn prop_stats_bound_every_sample(prices in arb_prices(60), dims in arb_dims()) {
        let geometry = compute_series_geometry(&to_points(&prices), dims);
        if prices.is_empty() {
            prop_assert!(!geometry.has_data());
        } else {
            let min = geometry.stats.min.unwrap();
            let max = geometry.stats.max.unwrap();
            for p in &prices {
                prop_assert!(min <= *p && *p <= max);
            }
        }
    }

    #[test]
    fn prop_short_series_have_no_path(prices in arb_prices(2), dims in arb_dims()) {
        let geometry = compute_series_geometry(&to_points(&prices), dims);
        prop_assert!(geometry.line.is_empty());
        prop_assert!(geometry.area.is_empty());
        prop_assert_eq!(geometry.stats.change_percent, 0.0);
        prop_assert!(geometry.stats.trend_positive);
    }

    #[test]
    fn prop_points_stay_inside_padded_box(
        prices in prop::collection::vec(0.0f64..1_000_000.0, 2..60),
        dims in arb_dims(),
    ) {
        let geometry = compute_series_geometry(&to_points(&prices), dims);
        prop_assert_eq!(geometry.line.len(), prices.len());
        prop_assert_eq!(geometry.area.len(), prices.len() + 2);
        prop_assert!(geometry.area.closed);

        let eps = 1e-9;
        for p in &geometry.area.points {
            prop_assert!(p.x.is_finite() && p.y.is_finite());
            prop_assert!(p.x >= dims.padding() - eps && p.x <= dims.width() - dims.padding() + eps);
            prop_assert!(p.y >= dims.padding() - eps && p.y <= dims.baseline() + eps);
        }
    }

    #[test]
    fn prop_flat_series_is_horizontal(price in 0.0f64..1_000_000.0, len in 2usize..40, dims in arb_dims()) {
        let prices = vec![price; len];
        let geometry = compute_series_geometry(&to_points(&prices), dims);
        let first_y = geometry.line.points[0].y;
        prop_assert!(first_y.is_finite());
        for p in &geometry.line.points {
            prop_assert_eq!(p.y, first_y);
        }
        prop_assert_eq!(geometry.stats.change_percent, 0.0);
    }

    #[test]
    fn prop_hover_snaps_to_plotted_sample(
        prices in prop::collection::vec(0.0f64..1_000.0, 2..40),
        dims in arb_dims(),
    ) {
        let geometry = compute_series_geometry(&to_points(&prices), dims);
        for i in 0..prices.len() {
            let x = geometry.point(i).unwrap().x;
            prop_assert_eq!(geometry.nearest_index(x), Some(i));
        }
    }
}

#[test]
fn three_point_series_matches_reference_values() {
    let dims = PlotDimensions::new(160.0, 80.0, 8.0).unwrap();
    let points = [
        PricePoint::new(0, 100.0),
        PricePoint::new(1, 150.0),
        PricePoint::new(2, 120.0),
    ];
    let geometry = compute_series_geometry(&points, dims);

    assert_eq!(geometry.stats.min, Some(100.0));
    assert_eq!(geometry.stats.max, Some(150.0));
    assert!((geometry.stats.change_percent - 20.0).abs() < 1e-9);
    assert!(geometry.stats.trend_positive);
}
