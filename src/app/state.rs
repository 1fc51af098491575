use crate::{
    analysis::compute_series_geometry,
    config::PLOT_CONFIG,
    domain::{CoinRecord, PricePoint},
    error::ConfigResult,
    models::{PlotDimensions, SeriesGeometry},
};

/// Validated boxes for the two sparkline sizes the app draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SparklineDims {
    pub table: PlotDimensions,
    pub card: PlotDimensions,
}

impl SparklineDims {
    pub fn from_config() -> ConfigResult<Self> {
        Ok(Self {
            table: PLOT_CONFIG.table_sparkline.dimensions()?,
            card: PLOT_CONFIG.card_sparkline.dimensions()?,
        })
    }
}

/// A fetched series with its geometry precomputed for both sizes.
#[derive(Debug, Clone)]
pub(crate) struct ChartData {
    pub points: Vec<PricePoint>,
    pub table: SeriesGeometry,
    pub card: SeriesGeometry,
}

impl ChartData {
    pub fn new(points: Vec<PricePoint>, dims: SparklineDims) -> Self {
        let table = compute_series_geometry(&points, dims.table);
        let card = compute_series_geometry(&points, dims.card);
        Self { points, table, card }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ChartState {
    Loading,
    Ready(ChartData),
}

#[derive(Debug, Clone, Default)]
pub(crate) enum CoinsState {
    #[default]
    Loading,
    /// Full replacement on every fetch. A failed fetch lands here as an empty list.
    Loaded(Vec<CoinRecord>),
}

impl CoinsState {
    pub fn coins(&self) -> &[CoinRecord] {
        match self {
            Self::Loading => &[],
            Self::Loaded(coins) => coins,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_data_builds_both_sizes_from_one_series() {
        let dims = SparklineDims::from_config().unwrap();
        let points = vec![PricePoint::new(0, 100.0), PricePoint::new(1, 150.0), PricePoint::new(2, 120.0)];
        let data = ChartData::new(points, dims);

        assert_eq!(data.table.dims, dims.table);
        assert_eq!(data.card.dims, dims.card);
        assert_eq!(data.table.stats, data.card.stats);
        assert_eq!(data.card.line.len(), 3);
        assert_eq!(data.points.len(), 3);
    }

    #[test]
    fn loading_coins_behave_as_empty_list() {
        let state = CoinsState::default();
        assert!(state.is_loading());
        assert!(state.coins().is_empty());

        let loaded = CoinsState::Loaded(vec![CoinRecord::new("btc", "Bitcoin", "BTC", 1.0)]);
        assert!(!loaded.is_loading());
        assert_eq!(loaded.coins().len(), 1);
    }
}
