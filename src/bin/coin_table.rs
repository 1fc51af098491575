use anyhow::{Context, Result};
use clap::Parser;
use futures::{StreamExt, stream};
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

use coin_vault::{
    API, CoinRecord, PERSISTENCE, SortDirection, SortKey, SortSpec,
    analysis::{compute_series_geometry, rank_coins, toggle_favorite},
    config::PLOT_CONFIG,
    data::{CoinGeckoProvider, FavoritesStore, JsonFileStore, load_coins_or_empty, load_series_or_empty},
    models::{EmptyState, FavoriteSet, MarketSummary},
    ui::{format_billions, format_change_7d, format_change_24h, format_price, render_svg},
};

/// Headless coin table: fetch, rank, print, and optionally write sparkline SVGs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Case-insensitive substring of name or symbol
    #[arg(long, default_value = "")]
    search: String,

    /// rank | price | change | volume
    #[arg(long, default_value = "rank")]
    sort: String,

    /// asc | desc
    #[arg(long, default_value = "asc")]
    direction: String,

    /// Only show coins in the favorites file
    #[arg(long, default_value_t = false)]
    favorites_only: bool,

    /// JSON array of favorite snapshots
    #[arg(long, default_value = PERSISTENCE.favorites.file_path)]
    favorites: PathBuf,

    /// Star or unstar a coin by id before printing (repeatable)
    #[arg(long = "toggle", value_name = "COIN_ID")]
    toggle: Vec<String>,

    /// Write one sparkline SVG per printed coin into this directory
    #[arg(long)]
    svg_dir: Option<PathBuf>,

    /// Maximum rows to print
    #[arg(long, default_value_t = 20)]
    limit: usize,

    #[arg(long, default_value = API.endpoints.coin_list_url)]
    coin_list_url: String,

    #[arg(long, default_value = API.endpoints.chart_base_url)]
    chart_base_url: String,

    #[arg(long, default_value_t = API.chart.days)]
    chart_days: u32,
}

#[derive(Tabled)]
struct CoinRow {
    #[tabled(rename = "#")]
    rank: String,
    #[tabled(rename = "")]
    star: &'static str,
    #[tabled(rename = "Coin")]
    coin: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "24h")]
    change_24h: String,
    #[tabled(rename = "7d")]
    change_7d: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Market Cap")]
    market_cap: String,
}

impl CoinRow {
    fn new(coin: &CoinRecord, favorites: &FavoriteSet) -> Self {
        Self {
            rank: coin
                .market_cap_rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
            star: if favorites.contains(&coin.id) { "★" } else { "" },
            coin: format!("{} ({})", coin.name, coin.symbol.to_uppercase()),
            price: format_price(coin.current_price),
            change_24h: format_change_24h(coin.price_change_percentage_24h),
            change_7d: format_change_7d(coin.price_change_percentage_7d),
            volume: format_billions(coin.total_volume, 2),
            market_cap: format_billions(coin.market_cap, 1),
        }
    }
}

fn empty_message(search: &str, favorites_only: bool) -> String {
    match EmptyState::select(search, favorites_only) {
        EmptyState::NoMatches(term) => format!("No results for \"{}\".", term),
        EmptyState::NoFavorites => "No favorites yet. Star coins with --toggle <COIN_ID>.".to_string(),
        EmptyState::NoCoins => "No cryptocurrencies available at the moment.".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Bad sort input is rejected before any network traffic
    let sort = SortSpec::new(SortKey::parse(&args.sort)?, SortDirection::parse(&args.direction)?);

    let mut store = JsonFileStore::new(&args.favorites);
    let mut favorites = store.load()?;

    let provider = CoinGeckoProvider::new(args.coin_list_url.clone(), args.chart_base_url.clone())?;
    let coins = load_coins_or_empty(&provider).await;

    if !args.toggle.is_empty() {
        for id in &args.toggle {
            // Unstarring works even when the coin dropped out of the live list
            let coin = coins
                .iter()
                .find(|c| &c.id == id)
                .or_else(|| favorites.get(id))
                .cloned();
            match coin {
                Some(coin) => favorites = toggle_favorite(&favorites, &coin),
                None => log::warn!("Cannot toggle '{}': not in the coin list", id),
            }
        }
        store.save(&favorites)?;
    }

    let visible: Vec<CoinRecord> = rank_coins(&coins, &args.search, sort, args.favorites_only, &favorites)
        .into_iter()
        .take(args.limit)
        .collect();

    if visible.is_empty() {
        println!("{}", empty_message(&args.search, args.favorites_only));
        return Ok(());
    }

    let rows: Vec<CoinRow> = visible.iter().map(|c| CoinRow::new(c, &favorites)).collect();
    println!("{}", Table::new(rows).with(Style::rounded()));

    let summary = MarketSummary::from_view(&visible, &favorites);
    println!(
        "Showing {} | ★ {} in watchlist | Gainers {} | Losers {}",
        summary.shown, summary.favorites, summary.gainers, summary.losers
    );

    if let Some(dir) = &args.svg_dir {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {:?}", dir))?;
        let dims = PLOT_CONFIG.card_sparkline.dimensions()?;
        let days = args.chart_days;
        let provider = &provider;

        // One fetch per printed coin, a few in flight at a time, results in table order
        let series: Vec<_> = stream::iter(visible.iter().map(|coin| async move {
            (coin, load_series_or_empty(provider, &coin.id, days).await)
        }))
        .buffered(API.client.max_in_flight.max(1))
        .collect()
        .await;

        for (coin, points) in series {
            let geometry = compute_series_geometry(&points, dims);
            let path = dir.join(format!("{}.svg", coin.id));
            tokio::fs::write(&path, render_svg(&geometry))
                .await
                .with_context(|| format!("Failed to write {:?}", path))?;
            log::info!(
                "Wrote {:?} ({} points, {:+.2}%)",
                path,
                points.len(),
                geometry.stats.change_percent
            );
        }
    }

    Ok(())
}
