use crate::{
    domain::{PricePoint, prices_of},
    models::{PlotDimensions, PlotPath, PlotPoint, SeriesGeometry, SeriesStats},
    utils::min_max,
};

/// Floor for the price span used in vertical normalisation, so equal prices never divide by zero.
pub const MIN_Y_RANGE: f64 = 1.0;

/// Turn an ordered price series into sparkline geometry for a `dims`-sized box.
///
/// Fewer than two samples yields empty paths. Never fails: the dimensions were validated
/// when `PlotDimensions` was built.
pub fn compute_series_geometry(points: &[PricePoint], dims: PlotDimensions) -> SeriesGeometry {
    let stats = series_stats(points);

    let (Some(min), Some(max)) = (stats.min, stats.max) else {
        return empty_geometry(dims, stats);
    };
    if points.len() < 2 {
        return empty_geometry(dims, stats);
    }

    let x_step = dims.inner_width() / (points.len() - 1) as f64;
    let y_range = (max - min).max(MIN_Y_RANGE);
    let flat = max - min <= 0.0;

    let line_points: Vec<PlotPoint> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = dims.padding() + i as f64 * x_step;
            let y = if flat {
                // A flat series sits mid-height rather than on the floor
                dims.height() / 2.0
            } else {
                dims.baseline() - ((p.price - min) / y_range) * dims.inner_height()
            };
            PlotPoint::new(x, y)
        })
        .collect();

    let mut area_points = line_points.clone();
    area_points.push(PlotPoint::new(dims.width() - dims.padding(), dims.baseline()));
    area_points.push(PlotPoint::new(dims.padding(), dims.baseline()));

    SeriesGeometry {
        dims,
        line: PlotPath {
            points: line_points,
            closed: false,
        },
        area: PlotPath {
            points: area_points,
            closed: true,
        },
        stats,
        x_step,
    }
}

/// Min, max, percent change and trend sign of a series.
pub fn series_stats(points: &[PricePoint]) -> SeriesStats {
    let Some(first) = points.first() else {
        return SeriesStats::default();
    };
    let (min, max) = min_max(&prices_of(points));

    let (change_percent, trend_positive) = match points.last() {
        Some(last) if points.len() >= 2 => {
            let change = if first.price.abs() > f64::EPSILON {
                (last.price - first.price) / first.price * 100.0
            } else {
                0.0
            };
            (change, last.price >= first.price)
        }
        _ => (0.0, true),
    };

    SeriesStats {
        min: Some(min),
        max: Some(max),
        change_percent,
        trend_positive,
    }
}

fn empty_geometry(dims: PlotDimensions, stats: SeriesStats) -> SeriesGeometry {
    SeriesGeometry {
        dims,
        line: PlotPath::default(),
        area: PlotPath {
            points: Vec::new(),
            closed: true,
        },
        stats,
        x_step: 0.0,
    }
}
