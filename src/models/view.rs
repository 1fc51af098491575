use crate::{domain::CoinRecord, models::FavoriteSet};

/// Why the coin table is empty, which decides the message shown in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    NoMatches(String),
    NoFavorites,
    NoCoins,
}

impl EmptyState {
    pub fn select(search: &str, favorites_only: bool) -> Self {
        if !search.is_empty() {
            Self::NoMatches(search.to_string())
        } else if favorites_only {
            Self::NoFavorites
        } else {
            Self::NoCoins
        }
    }
}

/// "Clear Filters" is only offered when a filter is actually active.
pub fn can_clear_filters(search: &str, favorites_only: bool) -> bool {
    !search.is_empty() || favorites_only
}

/// Footer numbers for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarketSummary {
    pub shown: usize,
    pub favorites: usize,
    pub gainers: usize,
    pub losers: usize,
}

impl MarketSummary {
    pub fn from_view(visible: &[CoinRecord], favorites: &FavoriteSet) -> Self {
        let gainers = visible
            .iter()
            .filter(|c| c.price_change_percentage_24h >= 0.0)
            .count();
        Self {
            shown: visible.len(),
            favorites: favorites.len(),
            gainers,
            losers: visible.len() - gainers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_message_wins_over_favorites_message() {
        assert_eq!(EmptyState::select("doge", true), EmptyState::NoMatches("doge".into()));
        assert_eq!(EmptyState::select("", true), EmptyState::NoFavorites);
        assert_eq!(EmptyState::select("", false), EmptyState::NoCoins);
    }

    #[test]
    fn clear_filters_only_when_filtering() {
        assert!(!can_clear_filters("", false));
        assert!(can_clear_filters("btc", false));
        assert!(can_clear_filters("", true));
    }

    #[test]
    fn summary_splits_gainers_and_losers() {
        let mut up = CoinRecord::new("a", "A", "A", 1.0);
        up.price_change_percentage_24h = 2.5;
        let mut flat = CoinRecord::new("b", "B", "B", 1.0);
        flat.price_change_percentage_24h = 0.0;
        let mut down = CoinRecord::new("c", "C", "C", 1.0);
        down.price_change_percentage_24h = -0.1;

        let favs = FavoriteSet::from_snapshots(vec![up.clone()]);
        let summary = MarketSummary::from_view(&[up, flat, down], &favs);
        assert_eq!(
            summary,
            MarketSummary {
                shown: 3,
                favorites: 1,
                gainers: 2,
                losers: 1
            }
        );
    }
}
