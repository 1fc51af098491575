use eframe::egui::{Context, Visuals};

use crate::ui::ui_config::UI_CONFIG;

/// Formats a price with "Trader Precision".
/// - Large (>=1000): 2 decimals with thousands separators ($95,123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Small (<1): 6-8 decimals ($0.00000231)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        let sign = if price < 0.0 { "-" } else { "" };
        format!("{}${}", sign, with_thousands(abs_price))
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.6}", price)
    } else {
        // Sub-penny / Meme coins: 8 decimals needed to see movement
        format!("${:.8}", price)
    }
}

fn with_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}.{}", grouped, frac_part)
}

/// Signed percentage, e.g. "+2.45%" with 2 decimals.
pub fn format_signed_percent(pct: f64, decimals: usize) -> String {
    format!("{:+.*}%", decimals, pct)
}

/// 24h change: sign and 2 decimals (e.g. "+2.45%").
pub fn format_change_24h(pct: f64) -> String {
    format_signed_percent(pct, 2)
}

/// 7d change: sign and 1 decimal, or "N/A".
pub fn format_change_7d(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format_signed_percent(p, 1),
        None => "N/A".to_string(),
    }
}

/// Short label for a chart history window, e.g. "7d" or "30d".
pub fn chart_window_label(days: u32) -> String {
    format!("{}d", days)
}

/// Dollar amount in billions, e.g. "$28.00B". Missing or zero shows "N/A".
pub fn format_billions(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v != 0.0 => format!("${:.*}B", decimals, v / 1e9),
        _ => "N/A".to_string(),
    }
}

/// Circulating supply in millions, e.g. "19M".
pub fn format_supply(value: Option<f64>) -> Option<String> {
    value.filter(|v| *v > 0.0).map(|v| format!("{:.0}M", v / 1e6))
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}
