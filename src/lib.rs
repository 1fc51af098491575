#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the coin_table binary)
pub use analysis::{compute_series_geometry, rank_coins, toggle_favorite};
pub use app::App;
pub use config::{API, PERSISTENCE};
pub use domain::{CoinRecord, PricePoint, SortDirection, SortKey, SortSpec};
pub use error::{ConfigError, ConfigResult};
pub use models::{FavoriteSet, PlotDimensions, SeriesGeometry, SeriesStats};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Endpoint returning the coin list (coins/markets JSON array)
    #[arg(long, default_value = API.endpoints.coin_list_url)]
    pub coin_list_url: String,

    /// Base URL for per-coin market_chart requests
    #[arg(long, default_value = API.endpoints.chart_base_url)]
    pub chart_base_url: String,

    /// Days of history in each sparkline
    #[arg(long, default_value_t = API.chart.days)]
    pub chart_days: u32,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
