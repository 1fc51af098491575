use {
    eframe::egui::{Button, CornerRadius, Grid, Image, RichText, ScrollArea, Ui, Vec2},
    std::collections::HashMap,
};

use crate::{
    app::{ChartState, SparklineDims},
    config::PLOT_CONFIG,
    domain::{CoinRecord, SortDirection, SortKey, SortSpec},
    models::FavoriteSet,
    ui::{
        UI_TEXT,
        sparkline::{SparklineSlot, render_sparkline},
        styles::{UiStyleExt, get_change_color},
        utils::{format_billions, format_change_7d, format_change_24h, format_price, format_supply},
    },
};

const COIN_ICON_SIZE: f32 = 24.0;

/// What the user did in the table this frame.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TableAction {
    Sort(SortKey),
    ToggleFavorite(CoinRecord),
}

pub(crate) struct CoinTable<'a> {
    pub coins: &'a [CoinRecord],
    pub sort: SortSpec,
    pub favorites: &'a FavoriteSet,
    pub charts: &'a HashMap<String, ChartState>,
    pub dims: SparklineDims,
}

impl CoinTable<'_> {
    pub fn render(&self, ui: &mut Ui) -> Option<TableAction> {
        let mut action = None;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Grid::new("coin_table_grid")
                    .striped(true)
                    .num_columns(9)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        // Header row. Only the four ranking columns are clickable.
                        if let Some(key) = self.header_row(ui) {
                            action = Some(TableAction::Sort(key));
                        }
                        ui.end_row();

                        for coin in self.coins {
                            if self.coin_row(ui, coin) {
                                action = Some(TableAction::ToggleFavorite(coin.clone()));
                            }
                            ui.end_row();
                        }
                    });
            });

        action
    }

    fn header_row(&self, ui: &mut Ui) -> Option<SortKey> {
        let mut clicked = None;
        for (label, key) in [
            (&UI_TEXT.col_rank, Some(SortKey::Rank)),
            (&UI_TEXT.col_coin, None),
            (&UI_TEXT.col_price, Some(SortKey::Price)),
            (&UI_TEXT.col_change, Some(SortKey::Change)),
            (&UI_TEXT.col_change_7d, None),
            (&UI_TEXT.col_volume, Some(SortKey::Volume)),
            (&UI_TEXT.col_market_cap, None),
            (&UI_TEXT.col_chart, None),
        ] {
            match key {
                Some(key) => {
                    if sort_header(ui, label, key, self.sort) {
                        clicked = Some(key);
                    }
                }
                None => {
                    ui.label(RichText::new(label.as_str()).strong());
                }
            }
        }
        ui.label(""); // Star column
        clicked
    }

    /// Returns true when the favorite star was clicked.
    fn coin_row(&self, ui: &mut Ui, coin: &CoinRecord) -> bool {
        let rank = coin
            .market_cap_rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        ui.label(RichText::new(rank).color(PLOT_CONFIG.color_rank_badge));

        ui.horizontal(|ui| {
            if !coin.image.is_empty() {
                ui.add(
                    Image::new(coin.image.as_str())
                        .fit_to_exact_size(Vec2::splat(COIN_ICON_SIZE))
                        .corner_radius(CornerRadius::same(COIN_ICON_SIZE as u8 / 2)),
                );
            }
            ui.vertical(|ui| {
                ui.label(RichText::new(&coin.name).strong());
                ui.label_subdued(coin.symbol.to_uppercase());
            });
        });

        ui.label(RichText::new(format_price(coin.current_price)).monospace());

        let change = coin.price_change_percentage_24h;
        ui.label(RichText::new(format_change_24h(change)).color(get_change_color(change)));

        let change_7d_color = coin
            .price_change_percentage_7d
            .map(get_change_color)
            .unwrap_or(PLOT_CONFIG.color_text_subdued);
        ui.label(RichText::new(format_change_7d(coin.price_change_percentage_7d)).color(change_7d_color));

        ui.label(format_billions(coin.total_volume, 2));

        ui.vertical(|ui| {
            ui.label(format_billions(coin.market_cap, 1));
            if let Some(supply) = format_supply(coin.circulating_supply) {
                ui.label_subdued(format!("{} {}", supply, coin.symbol.to_uppercase()));
            }
        });

        render_sparkline(
            ui,
            self.charts.get(&coin.id),
            self.dims.table,
            SparklineSlot::TableRow,
        );

        favorite_star(ui, self.favorites.contains(&coin.id))
    }
}

fn sort_header(ui: &mut Ui, label: &str, key: SortKey, sort: SortSpec) -> bool {
    let text = if sort.key == key {
        let arrow = match sort.direction {
            SortDirection::Ascending => &UI_TEXT.icon_sort_asc,
            SortDirection::Descending => &UI_TEXT.icon_sort_desc,
        };
        format!("{} {}", label, arrow)
    } else {
        label.to_string()
    };
    ui.add(Button::new(RichText::new(text).strong()).frame(false))
        .on_hover_text(format!("Sort by {}", key))
        .clicked()
}

/// Star toggle shared by table rows and favorite cards. Returns true when clicked.
pub(crate) fn favorite_star(ui: &mut Ui, is_favorite: bool) -> bool {
    let (icon, color, hover) = if is_favorite {
        (&UI_TEXT.icon_star, PLOT_CONFIG.color_favorite, &UI_TEXT.hover_remove_favorite)
    } else {
        (&UI_TEXT.icon_star_empty, PLOT_CONFIG.color_text_subdued, &UI_TEXT.hover_add_favorite)
    };
    ui.add(Button::new(RichText::new(icon.as_str()).size(18.0).color(color)).frame(false))
        .on_hover_text(hover.as_str())
        .clicked()
}
