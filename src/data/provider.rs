use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    config::{API, DF, market_chart_url},
    domain::{CoinRecord, PricePoint},
};

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Current coin list, unordered.
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>>;

    /// Price history of one coin over the last `days`, oldest sample first.
    async fn fetch_price_series(&self, coin_id: &str, days: u32) -> Result<Vec<PricePoint>>;
}

/// Shape of the `market_chart` response. Only the prices are used.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<(f64, f64)>,
}

pub struct CoinGeckoProvider {
    client: Client,
    coin_list_url: String,
    chart_base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(coin_list_url: impl Into<String>, chart_base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(API.client.timeout_ms))
            .user_agent(API.client.user_agent)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            coin_list_url: coin_list_url.into(),
            chart_base_url: chart_base_url.into(),
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Unexpected response body from {}", url))
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>> {
        self.get_json(&self.coin_list_url).await
    }

    async fn fetch_price_series(&self, coin_id: &str, days: u32) -> Result<Vec<PricePoint>> {
        let url = market_chart_url(&self.chart_base_url, coin_id, days);
        let response: MarketChartResponse = self.get_json(&url).await?;
        Ok(to_price_points(response))
    }
}

fn to_price_points(response: MarketChartResponse) -> Vec<PricePoint> {
    response
        .prices
        .into_iter()
        .map(|(time_ms, price)| PricePoint::new(time_ms as i64, price))
        .collect()
}

/// Coin list, or no coins when the source is unavailable. The failure is logged, not propagated.
pub async fn load_coins_or_empty(provider: &dyn MarketDataProvider) -> Vec<CoinRecord> {
    match provider.fetch_coins().await {
        Ok(coins) => {
            if DF.log_fetches {
                log::info!("Fetched {} coins", coins.len());
            }
            coins
        }
        Err(e) => {
            log::error!("Error fetching coins: {:#}", e);
            Vec::new()
        }
    }
}

/// Price series for one coin, or an empty series when the source is unavailable.
pub async fn load_series_or_empty(
    provider: &dyn MarketDataProvider,
    coin_id: &str,
    days: u32,
) -> Vec<PricePoint> {
    match provider.fetch_price_series(coin_id, days).await {
        Ok(points) => {
            if DF.log_fetches {
                log::info!("Fetched {} price points for {}", points.len(), coin_id);
            }
            points
        }
        Err(e) => {
            log::warn!("Error fetching prices for {}: {:#}", coin_id, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Unreachable;

    #[async_trait]
    impl MarketDataProvider for Unreachable {
        async fn fetch_coins(&self) -> Result<Vec<CoinRecord>> {
            Err(anyhow!("connection refused"))
        }

        async fn fetch_price_series(&self, _coin_id: &str, _days: u32) -> Result<Vec<PricePoint>> {
            Err(anyhow!("connection refused"))
        }
    }

    #[test]
    fn parses_market_chart_prices() {
        let json = r#"{
            "prices": [[1700000000000, 37000.5], [1700003600000.0, 37100.25]],
            "market_caps": [[1700000000000, 1.0]],
            "total_volumes": []
        }"#;
        let response: MarketChartResponse = serde_json::from_str(json).unwrap();
        let points = to_price_points(response);
        assert_eq!(
            points,
            vec![
                PricePoint::new(1_700_000_000_000, 37000.5),
                PricePoint::new(1_700_003_600_000, 37100.25)
            ]
        );
    }

    #[tokio::test]
    async fn unavailable_source_yields_empty_results() {
        assert!(load_coins_or_empty(&Unreachable).await.is_empty());
        assert!(load_series_or_empty(&Unreachable, "bitcoin", 7).await.is_empty());
    }
}
