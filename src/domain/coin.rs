use serde::{Deserialize, Deserializer, Serialize};

/// Rank assigned to coins the market feed has not ranked yet.
pub const UNRANKED: u32 = 999;

/// A coin as delivered by the markets feed.
///
/// `id` is the identity. Every other field is replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_change_percentage_24h: f64,

    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    // CoinGecko names this `..._in_currency` when requested via `price_change_percentage=7d`
    #[serde(default, alias = "price_change_percentage_7d_in_currency")]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
}

/// The markets feed sends `null` for prices it has not computed yet (new listings).
/// Treat it like a missing key, so one such coin cannot reject the whole list.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CoinRecord {
    /// Minimal record, mostly for tests and demo data.
    pub fn new(id: &str, name: &str, symbol: &str, current_price: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            image: String::new(),
            current_price,
            price_change_percentage_24h: 0.0,
            market_cap_rank: None,
            market_cap: None,
            total_volume: None,
            price_change_percentage_7d: None,
            high_24h: None,
            low_24h: None,
            circulating_supply: None,
            total_supply: None,
        }
    }

    pub fn rank_or_unranked(&self) -> u32 {
        self.market_cap_rank.unwrap_or(UNRANKED)
    }

    pub fn volume_or_zero(&self) -> f64 {
        self.total_volume.unwrap_or(0.0)
    }

    /// Case-insensitive substring match against name or symbol. Empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.symbol.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_markets_payload_with_missing_optionals() {
        let json = r#"{
            "id": "ethereum",
            "name": "Ethereum",
            "symbol": "eth",
            "image": "https://assets.coingecko.com/coins/images/279/large/ethereum.png",
            "current_price": 2845.75,
            "price_change_percentage_24h": -1.23,
            "market_cap_rank": 2,
            "total_supply": null,
            "price_change_percentage_7d_in_currency": 5.1
        }"#;
        let coin: CoinRecord = serde_json::from_str(json).unwrap();
        assert_eq!(coin.id, "ethereum");
        assert_eq!(coin.market_cap_rank, Some(2));
        assert_eq!(coin.total_supply, None);
        assert_eq!(coin.total_volume, None);
        assert_eq!(coin.price_change_percentage_7d, Some(5.1));
    }

    #[test]
    fn null_prices_do_not_reject_the_list() {
        let json = r#"[
            {"id": "bitcoin", "name": "Bitcoin", "symbol": "btc", "current_price": 45000.0,
             "price_change_percentage_24h": 2.5, "market_cap_rank": 1},
            {"id": "newcoin", "name": "New Coin", "symbol": "new", "image": null,
             "current_price": null, "price_change_percentage_24h": null, "market_cap_rank": null}
        ]"#;
        let coins: Vec<CoinRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(coins.len(), 2);
        assert_eq!(coins[0].price_change_percentage_24h, 2.5);

        let fresh = &coins[1];
        assert_eq!(fresh.id, "newcoin");
        assert_eq!(fresh.current_price, 0.0);
        assert_eq!(fresh.price_change_percentage_24h, 0.0);
        assert!(fresh.image.is_empty());
        assert_eq!(fresh.rank_or_unranked(), UNRANKED);
    }

    #[test]
    fn fallbacks_for_missing_rank_and_volume() {
        let coin = CoinRecord::new("x", "Xcoin", "XC", 1.0);
        assert_eq!(coin.rank_or_unranked(), UNRANKED);
        assert_eq!(coin.volume_or_zero(), 0.0);
    }

    #[test]
    fn search_matches_name_or_symbol_ignoring_case() {
        let coin = CoinRecord::new("bitcoin", "Bitcoin", "BTC", 45_000.0);
        assert!(coin.matches_search(""));
        assert!(coin.matches_search("coin"));
        assert!(coin.matches_search("bt"));
        assert!(coin.matches_search("BITC"));
        assert!(!coin.matches_search("eth"));
    }
}
