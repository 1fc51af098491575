use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, RichText, Spinner, TopBottomPanel},
    },
    serde::{Deserialize, Serialize},
    std::{
        collections::HashMap,
        sync::{Arc, mpsc::Receiver},
    },
};

use crate::{
    Cli,
    analysis::{rank_coins, toggle_favorite},
    app::{ChartData, ChartState, CoinsState, SparklineDims},
    config::{API, DF, PERSISTENCE},
    data::{CoinGeckoProvider, FetchEvent, FetchWorker, load_from_storage, save_to_storage},
    domain::{CoinRecord, SortSpec},
    models::{FavoriteSet, MarketSummary},
    trace_time,
    ui::{
        CoinTable, TableAction, UI_CONFIG, UI_TEXT, render_empty_state, render_favorites_strip,
        render_footer, render_top_bar, setup_custom_visuals,
    },
};

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct App {
    // View settings persist across sessions.
    pub(crate) search: String,
    pub(crate) sort: SortSpec,
    pub(crate) favorites_only: bool,
    // Favorites are stored under their own key, as a plain JSON array.
    #[serde(skip)]
    pub(crate) favorites: FavoriteSet,
    #[serde(skip)]
    favorites_dirty: bool,
    #[serde(skip)]
    pub(crate) coins: CoinsState,
    #[serde(skip)]
    pub(crate) charts: HashMap<String, ChartState>,
    #[serde(skip)]
    worker: Option<FetchWorker>,
    #[serde(skip)]
    events: Option<Receiver<FetchEvent>>,
    #[serde(skip)]
    dims: Option<SparklineDims>,
    #[serde(skip)]
    chart_days: u32,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<Self> {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Some(storage) = cc.storage {
            app.favorites = load_from_storage(storage, PERSISTENCE.favorites.storage_key);
        }
        if DF.log_favorites {
            log::info!("Starting with {} favorites", app.favorites.len());
        }

        egui_extras::install_image_loaders(&cc.egui_ctx);
        setup_custom_visuals(&cc.egui_ctx);

        app.dims = Some(SparklineDims::from_config()?);
        app.chart_days = args.chart_days;

        let provider = CoinGeckoProvider::new(args.coin_list_url, args.chart_base_url)?;
        let (worker, events) = FetchWorker::new(
            Arc::new(provider),
            args.chart_days,
            API.client.max_in_flight,
            Some(cc.egui_ctx.clone()),
        )?;
        worker.request_coins();

        app.worker = Some(worker);
        app.events = Some(events);
        Ok(app)
    }

    /// Apply every fetch result that arrived since the last frame.
    fn drain_fetch_events(&mut self) {
        let (Some(events), Some(dims)) = (&self.events, self.dims) else {
            return;
        };
        for event in events.try_iter() {
            match event {
                FetchEvent::Coins(coins) => {
                    if DF.log_fetches {
                        log::info!("Coin list replaced ({} records)", coins.len());
                    }
                    self.coins = CoinsState::Loaded(coins);
                }
                FetchEvent::Series { coin_id, points } => {
                    let data = ChartData::new(points, dims);
                    self.charts.insert(coin_id, ChartState::Ready(data));
                }
            }
        }
    }

    /// One chart fetch per coin on screen (table rows and favorite cards), issued once.
    fn request_missing_charts(&mut self, visible: &[CoinRecord]) {
        let Some(worker) = &self.worker else {
            return;
        };
        let ids = visible
            .iter()
            .chain(self.favorites.iter())
            .map(|coin| coin.id.as_str());
        for id in ids {
            if !self.charts.contains_key(id) {
                self.charts.insert(id.to_string(), ChartState::Loading);
                worker.request_series(id);
            }
        }
    }

    fn apply_action(&mut self, action: TableAction) {
        match action {
            TableAction::Sort(key) => {
                self.sort = self.sort.select(key);
                if DF.log_view_changes {
                    log::info!("Sort changed to {} {}", self.sort.key, self.sort.direction);
                }
            }
            TableAction::ToggleFavorite(coin) => {
                self.favorites = toggle_favorite(&self.favorites, &coin);
                self.favorites_dirty = true;
                if DF.log_favorites {
                    log::info!("Toggled favorite '{}' ({} total)", coin.id, self.favorites.len());
                }
            }
        }
    }

    pub(crate) fn clear_filters(&mut self) {
        self.search.clear();
        self.favorites_only = false;
    }

    fn persist_favorites(&mut self, storage: &mut dyn Storage) {
        match save_to_storage(storage, PERSISTENCE.favorites.storage_key, &self.favorites) {
            Ok(()) => self.favorites_dirty = false,
            Err(e) => log::error!("Failed to persist favorites: {:#}", e),
        }
    }

    fn render(&mut self, ctx: &Context, visible: &[CoinRecord]) {
        TopBottomPanel::top("top_bar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                let changed = render_top_bar(
                    ui,
                    &mut self.search,
                    &mut self.favorites_only,
                    self.favorites.len(),
                );
                if changed && DF.log_view_changes {
                    log::info!(
                        "Filters: search '{}', favorites only {}",
                        self.search,
                        self.favorites_only
                    );
                }
            });

        TopBottomPanel::bottom("footer")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                render_footer(ui, MarketSummary::from_view(visible, &self.favorites));
            });

        let mut action = None;
        let mut clear = false;
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let dims = match self.dims {
                    Some(dims) => dims,
                    None => return,
                };

                if !self.favorites.is_empty() && !self.favorites_only {
                    if let Some(coin) = render_favorites_strip(
                        ui,
                        &self.favorites,
                        &self.charts,
                        dims,
                        self.chart_days,
                    ) {
                        action = Some(TableAction::ToggleFavorite(coin));
                    }
                    ui.separator();
                }

                if self.coins.is_loading() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(48.0);
                        ui.add(Spinner::new().size(32.0));
                        ui.label(RichText::new(&UI_TEXT.loading_coins).color(UI_CONFIG.colors.label));
                    });
                } else if visible.is_empty() {
                    clear = render_empty_state(ui, &self.search, self.favorites_only);
                } else {
                    let table = CoinTable {
                        coins: visible,
                        sort: self.sort,
                        favorites: &self.favorites,
                        charts: &self.charts,
                        dims,
                    };
                    if let Some(a) = table.render(ui) {
                        action = Some(a);
                    }
                }
            });

        if clear {
            self.clear_filters();
        }
        if let Some(action) = action {
            self.apply_action(action);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        self.drain_fetch_events();

        let visible = trace_time!("rank_coins", 2_000, {
            rank_coins(
                self.coins.coins(),
                &self.search,
                self.sort,
                self.favorites_only,
                &self.favorites,
            )
        });
        self.request_missing_charts(&visible);
        self.render(ctx, &visible);

        // Every toggle is written straight away, not only on the periodic save
        if self.favorites_dirty {
            if let Some(storage) = frame.storage_mut() {
                self.persist_favorites(storage);
            }
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_view_changes {
            log::info!(
                "Saving view: search '{}', sort {} {}, favorites only {}",
                self.search,
                self.sort.key,
                self.sort.direction,
                self.favorites_only
            );
        }
        self.persist_favorites(storage);
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortKey;

    #[test]
    fn only_view_settings_are_persisted() {
        let mut app = App::default();
        app.search = "eth".to_string();
        app.favorites_only = true;
        app.sort = app.sort.select(SortKey::Price);
        app.favorites = FavoriteSet::from_snapshots(vec![CoinRecord::new("eth", "Ethereum", "ETH", 1.0)]);

        let json = serde_json::to_string(&app).unwrap();
        let restored: App = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.search, "eth");
        assert!(restored.favorites_only);
        assert_eq!(restored.sort, app.sort);
        assert!(restored.favorites.is_empty());
        assert!(restored.coins.is_loading());
    }

    #[test]
    fn old_state_without_fields_falls_back_to_defaults() {
        let restored: App = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.sort, SortSpec::default());
        assert!(restored.search.is_empty());
    }

    #[test]
    fn toggling_marks_favorites_for_persisting() {
        let mut app = App::default();
        let coin = CoinRecord::new("btc", "Bitcoin", "BTC", 50_000.0);

        app.apply_action(TableAction::ToggleFavorite(coin.clone()));
        assert!(app.favorites.contains("btc"));
        assert!(app.favorites_dirty);

        app.apply_action(TableAction::ToggleFavorite(coin));
        assert!(app.favorites.is_empty());
    }

    #[test]
    fn header_clicks_flip_or_reset_direction() {
        let mut app = App::default();
        app.apply_action(TableAction::Sort(SortKey::Rank));
        assert_eq!(app.sort.direction, crate::domain::SortDirection::Descending);
        app.apply_action(TableAction::Sort(SortKey::Volume));
        assert_eq!(app.sort.key, SortKey::Volume);
        assert_eq!(app.sort.direction, crate::domain::SortDirection::Descending);
    }

    #[test]
    fn clear_filters_resets_search_and_toggle() {
        let mut app = App::default();
        app.search = "doge".into();
        app.favorites_only = true;
        app.clear_filters();
        assert!(app.search.is_empty());
        assert!(!app.favorites_only);
    }
}
