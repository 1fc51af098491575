use serde::{Deserialize, Serialize};

/// One sample of a price series.
///
/// Sources deliver samples ordered by `time_ms` ascending; nothing downstream re-sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time_ms: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(time_ms: i64, price: f64) -> Self {
        Self { time_ms, price }
    }
}

/// Pull the bare prices out of a series (used for min/max scans).
pub fn prices_of(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.price).collect()
}
