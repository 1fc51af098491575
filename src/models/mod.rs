mod favorites;
mod geometry;
mod view;

pub use favorites::FavoriteSet;
pub use geometry::{PlotDimensions, PlotPath, PlotPoint, SeriesGeometry, SeriesStats};
pub use view::{EmptyState, MarketSummary, can_clear_filters};
