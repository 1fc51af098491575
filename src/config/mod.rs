//! Configuration module for the coin tracker.

// Can all be private now because we have a public re-export.
mod api;
mod debug;
mod persistence;
mod plot;

// Re-export commonly used items
pub use api::{API, ApiConfig, market_chart_url};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use plot::{PLOT_CONFIG, PlotConfig, SparklineSize};
