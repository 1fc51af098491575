use {
    eframe::egui::{Align, Layout, RichText, ScrollArea, TextEdit, Ui},
    std::collections::HashMap,
};

use crate::{
    app::{ChartState, SparklineDims},
    config::PLOT_CONFIG,
    domain::CoinRecord,
    models::{EmptyState, FavoriteSet, MarketSummary, can_clear_filters},
    ui::{
        UI_CONFIG, UI_TEXT,
        coin_table::favorite_star,
        sparkline::{SparklineSlot, render_mini_stats, render_sparkline},
        styles::{UiStyleExt, get_change_color},
        utils::{format_change_24h, format_price},
    },
};

/// Title, search box, favorites-only toggle and favorites count.
/// Returns true if the search text or the toggle changed.
pub(crate) fn render_top_bar(
    ui: &mut Ui,
    search: &mut String,
    favorites_only: &mut bool,
    favorites_count: usize,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
            ui.label_subdued(UI_TEXT.app_tagline.as_str());
        });

        ui.add_space(24.0);
        ui.label(UI_TEXT.icon_search.as_str());
        changed |= ui
            .add(
                TextEdit::singleline(search)
                    .hint_text(UI_TEXT.search_hint.as_str())
                    .desired_width(280.0),
            )
            .changed();
        if !search.is_empty() && ui.small_button(UI_TEXT.icon_close.as_str()).clicked() {
            search.clear();
            changed = true;
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{} {}", UI_TEXT.icon_star, favorites_count))
                    .color(PLOT_CONFIG.color_favorite),
            );
            changed |= ui
                .toggle_value(favorites_only, UI_TEXT.favorites_only.as_str())
                .changed();
        });
    });
    changed
}

/// Horizontal strip of favorite snapshot cards. Returns the card whose star was clicked.
pub(crate) fn render_favorites_strip(
    ui: &mut Ui,
    favorites: &FavoriteSet,
    charts: &HashMap<String, ChartState>,
    dims: SparklineDims,
    chart_days: u32,
) -> Option<CoinRecord> {
    let mut removed = None;

    ui.label_subheader(UI_TEXT.favorites_heading.as_str());
    ScrollArea::horizontal()
        .id_salt("favorites_strip")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for coin in favorites.iter() {
                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&coin.name).strong());
                                ui.label_subdued(coin.symbol.to_uppercase());
                                if favorite_star(ui, true) {
                                    removed = Some(coin.clone());
                                }
                            });
                            // Snapshot values, as they were when the coin was starred
                            ui.label(RichText::new(format_price(coin.current_price)).monospace());
                            let change = coin.price_change_percentage_24h;
                            ui.label(
                                RichText::new(format_change_24h(change))
                                    .small()
                                    .color(get_change_color(change)),
                            );
                            let chart = charts.get(&coin.id);
                            render_sparkline(ui, chart, dims.card, SparklineSlot::FavoriteCard);
                            render_mini_stats(ui, chart, chart_days);
                        });
                    });
                }
            });
        });

    removed
}

/// Message shown in place of an empty table. Returns true if "Clear Filters" was clicked.
pub(crate) fn render_empty_state(ui: &mut Ui, search: &str, favorites_only: bool) -> bool {
    let message = match EmptyState::select(search, favorites_only) {
        EmptyState::NoMatches(term) => UI_TEXT.no_matches(&term),
        EmptyState::NoFavorites => UI_TEXT.empty_no_favorites.clone(),
        EmptyState::NoCoins => UI_TEXT.empty_no_coins.clone(),
    };

    let mut clear = false;
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading(RichText::new(&UI_TEXT.empty_heading).color(UI_CONFIG.colors.heading));
        ui.label(message);
        if can_clear_filters(search, favorites_only) {
            ui.add_space(8.0);
            clear = ui.button(UI_TEXT.clear_filters.as_str()).clicked();
        }
    });
    clear
}

pub(crate) fn render_footer(ui: &mut Ui, summary: MarketSummary) {
    ui.horizontal(|ui| {
        ui.metric(
            &UI_TEXT.label_shown,
            &summary.shown.to_string(),
            PLOT_CONFIG.color_text_primary,
        );
        ui.separator();
        ui.label(
            RichText::new(format!(
                "{} {} {}",
                UI_TEXT.icon_star, summary.favorites, UI_TEXT.label_in_watchlist
            ))
            .small()
            .color(PLOT_CONFIG.color_favorite),
        );
        ui.separator();
        ui.metric(
            &UI_TEXT.label_gainers,
            &summary.gainers.to_string(),
            PLOT_CONFIG.color_trend_up,
        );
        ui.metric(
            &UI_TEXT.label_losers,
            &summary.losers.to_string(),
            PLOT_CONFIG.color_trend_down,
        );
    });
}
