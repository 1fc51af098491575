use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Target box for a sparkline, in output pixels.
///
/// Only constructible through [`PlotDimensions::new`], so the drawable area is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotDimensions {
    width: f64,
    height: f64,
    padding: f64,
}

impl PlotDimensions {
    pub fn new(width: f64, height: f64, padding: f64) -> ConfigResult<Self> {
        let finite = width.is_finite() && height.is_finite() && padding.is_finite();
        if !finite
            || width <= 0.0
            || height <= 0.0
            || padding < 0.0
            || width <= 2.0 * padding
            || height <= 2.0 * padding
        {
            return Err(ConfigError::InvalidDimensions {
                width,
                height,
                padding,
            });
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[inline]
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    #[inline]
    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// y coordinate of the plot floor (the area fill closes along it).
    #[inline]
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Straight-segment polyline in pixel space. `closed` paths are polygons (area fill).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotPath {
    pub points: Vec<PlotPoint>,
    pub closed: bool,
}

impl PlotPath {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// SVG path data: moveto the first point, lineto the rest, `Z` when closed.
    /// Empty paths render as an empty string.
    pub fn to_svg_path(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }
        let body = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{} {:.2} {:.2}", cmd, p.x, p.y)
            })
            .join(" ");
        if self.closed { format!("{} Z", body) } else { body }
    }
}

/// Summary statistics of a price series.
///
/// `min`/`max` are `None` only for an empty series, which callers must treat as "no data".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub change_percent: f64,
    pub trend_positive: bool,
}

impl Default for SeriesStats {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            change_percent: 0.0,
            trend_positive: true,
        }
    }
}

/// Everything a presentation layer needs to paint one sparkline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGeometry {
    pub dims: PlotDimensions,
    pub line: PlotPath,
    pub area: PlotPath,
    pub stats: SeriesStats,
    /// Horizontal distance between consecutive samples. 0.0 when there is no path.
    pub x_step: f64,
}

impl SeriesGeometry {
    /// False for the empty series: there is nothing to show, not even a single price.
    pub fn has_data(&self) -> bool {
        self.stats.min.is_some()
    }

    /// True when a line can be drawn (two or more samples).
    pub fn has_path(&self) -> bool {
        !self.line.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<PlotPoint> {
        self.line.points.get(index).copied()
    }

    /// Index of the sample closest to horizontal pixel offset `x` (same space as the path).
    /// Positions outside the plot clamp to the first/last sample.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        let count = self.line.len();
        if count == 0 || self.x_step <= 0.0 || !x.is_finite() {
            return None;
        }
        let raw = ((x - self.dims.padding()) / self.x_step).round();
        let last = (count - 1) as f64;
        Some(raw.clamp(0.0, last) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(PlotDimensions::new(0.0, 80.0, 8.0).is_err());
        assert!(PlotDimensions::new(160.0, -1.0, 8.0).is_err());
        assert!(PlotDimensions::new(160.0, 80.0, -2.0).is_err());
        assert!(PlotDimensions::new(f64::NAN, 80.0, 8.0).is_err());
    }

    #[test]
    fn rejects_padding_that_swallows_the_plot() {
        assert!(PlotDimensions::new(16.0, 80.0, 8.0).is_err());
        assert!(PlotDimensions::new(160.0, 10.0, 5.0).is_err());
        assert!(PlotDimensions::new(160.0, 80.0, 0.0).is_ok());
    }

    #[test]
    fn svg_path_uses_moveto_then_lineto() {
        let path = PlotPath {
            points: vec![PlotPoint::new(8.0, 72.0), PlotPoint::new(80.0, 8.0)],
            closed: false,
        };
        assert_eq!(path.to_svg_path(), "M 8.00 72.00 L 80.00 8.00");

        let closed = PlotPath {
            closed: true,
            ..path
        };
        assert!(closed.to_svg_path().ends_with(" Z"));
        assert_eq!(PlotPath::default().to_svg_path(), "");
    }
}
