mod coin_table;
mod panels;
mod sparkline;
mod styles;
mod svg;
mod ui_config;
mod ui_text;
mod utils;

pub(crate) use coin_table::{CoinTable, TableAction};
pub(crate) use panels::{render_empty_state, render_favorites_strip, render_footer, render_top_bar};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};

pub use svg::render_svg;
pub use utils::{
    chart_window_label, format_billions, format_change_7d, format_change_24h, format_price,
    format_signed_percent, format_supply, setup_custom_visuals,
};
