// Pure transforms from raw market data to presentation-ready views
pub mod coin_ranker;
pub mod series_geometry;

pub use coin_ranker::{rank_coins, sort_value, toggle_favorite};
pub use series_geometry::{compute_series_geometry, series_stats};
