//! Market-data endpoints and client settings.

pub struct EndpointConfig {
    /// Coin list in the CoinGecko `coins/markets` shape.
    pub coin_list_url: &'static str,
    /// Base for `/coins/{id}/market_chart`.
    pub chart_base_url: &'static str,
    pub vs_currency: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
    /// Requests allowed in flight at once. The rest queue until a slot frees up.
    pub max_in_flight: usize,
}

pub struct ChartDefaults {
    /// Days of history behind each sparkline.
    pub days: u32,
}

pub struct ApiConfig {
    pub endpoints: EndpointConfig,
    pub client: ClientDefaults,
    pub chart: ChartDefaults,
}

pub const API: ApiConfig = ApiConfig {
    endpoints: EndpointConfig {
        coin_list_url: "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=100&page=1&price_change_percentage=7d",
        chart_base_url: "https://api.coingecko.com/api/v3",
        vs_currency: "usd",
    },
    client: ClientDefaults {
        timeout_ms: 10_000,
        user_agent: concat!("coin-vault/", env!("CARGO_PKG_VERSION")),
        max_in_flight: 4,
    },
    chart: ChartDefaults { days: 7 },
};

/// `market_chart` URL for one coin.
pub fn market_chart_url(base_url: &str, coin_id: &str, days: u32) -> String {
    format!(
        "{}/coins/{}/market_chart?vs_currency={}&days={}",
        base_url.trim_end_matches('/'),
        coin_id,
        API.endpoints.vs_currency,
        days
    )
}
