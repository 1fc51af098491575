use std::sync::LazyLock;

pub const ICON_STAR: &str = "★";
pub const ICON_STAR_EMPTY: &str = "☆";
pub const ICON_SEARCH: &str = "🔍";
pub const ICON_CLOSE: &str = "✖";
// (Sort arrows)
pub const ICON_SORT_ASC: &str = "⏶";
pub const ICON_SORT_DESC: &str = "⏷";
pub const ICON_TREND_UP: &str = "📈";
pub const ICON_TREND_DOWN: &str = "📉";

pub struct UiText {
    pub app_title: String,
    pub app_tagline: String,

    // --- Search bar ---
    pub search_hint: String,
    pub icon_search: String,
    pub icon_close: String,

    // --- Favorites ---
    pub icon_star: String,
    pub icon_star_empty: String,
    pub favorites_heading: String,
    pub favorites_only: String,
    pub hover_add_favorite: String,
    pub hover_remove_favorite: String,

    // --- Table headers ---
    pub col_rank: String,
    pub col_coin: String,
    pub col_price: String,
    pub col_change: String,
    pub col_change_7d: String,
    pub col_volume: String,
    pub col_market_cap: String,
    pub col_chart: String,
    pub icon_sort_asc: String,
    pub icon_sort_desc: String,

    // --- Chart ---
    pub icon_trend_up: String,
    pub icon_trend_down: String,
    pub chart_no_data: String,

    // --- Empty state ---
    pub empty_heading: String,
    pub empty_no_coins: String,
    pub empty_no_favorites: String,
    pub clear_filters: String,

    // --- Status / footer ---
    pub loading_coins: String,
    pub label_shown: String,
    pub label_in_watchlist: String,
    pub label_gainers: String,
    pub label_losers: String,
}

impl UiText {
    pub fn no_matches(&self, search: &str) -> String {
        format!("No results for \"{}\". Try adjusting your search terms.", search)
    }
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "CryptoVault".to_string(),
    app_tagline: "Live prices, 7 day charts and your watchlist".to_string(),

    search_hint: "Search cryptocurrencies by name or symbol...".to_string(),
    icon_search: ICON_SEARCH.to_string(),
    icon_close: ICON_CLOSE.to_string(),

    icon_star: ICON_STAR.to_string(),
    icon_star_empty: ICON_STAR_EMPTY.to_string(),
    favorites_heading: ICON_STAR.to_string() + " Your Favorites",
    favorites_only: ICON_STAR.to_string() + " Favorites only",
    hover_add_favorite: "Add to favorites".to_string(),
    hover_remove_favorite: "Remove from favorites".to_string(),

    col_rank: "#".to_string(),
    col_coin: "Coin".to_string(),
    col_price: "Price".to_string(),
    col_change: "24h".to_string(),
    col_change_7d: "7d".to_string(),
    col_volume: "Volume".to_string(),
    col_market_cap: "Market Cap".to_string(),
    col_chart: "7d Chart".to_string(),
    icon_sort_asc: ICON_SORT_ASC.to_string(),
    icon_sort_desc: ICON_SORT_DESC.to_string(),

    icon_trend_up: ICON_TREND_UP.to_string(),
    icon_trend_down: ICON_TREND_DOWN.to_string(),
    chart_no_data: "No data".to_string(),

    empty_heading: "No coins found".to_string(),
    empty_no_coins: "No cryptocurrencies available at the moment.".to_string(),
    empty_no_favorites: "You haven't added any favorites yet. Star some coins to see them here!"
        .to_string(),
    clear_filters: "Clear Filters".to_string(),

    loading_coins: "Loading market data...".to_string(),
    label_shown: "Showing".to_string(),
    label_in_watchlist: "in watchlist".to_string(),
    label_gainers: "Gainers".to_string(),
    label_losers: "Losers".to_string(),
});
