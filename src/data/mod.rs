mod favorites_store;
mod fetch_worker;
mod provider;

pub use {
    favorites_store::{FavoritesStore, JsonFileStore, load_from_storage, save_to_storage},
    fetch_worker::{FetchEvent, FetchWorker},
    provider::{CoinGeckoProvider, MarketDataProvider, load_coins_or_empty, load_series_or_empty},
};
