//! Sparkline and table colour configuration

use eframe::egui::Color32;

use crate::{error::ConfigResult, models::PlotDimensions};

/// Box (in points) a sparkline is drawn into.
pub struct SparklineSize {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl SparklineSize {
    pub fn dimensions(&self) -> ConfigResult<PlotDimensions> {
        PlotDimensions::new(self.width, self.height, self.padding)
    }
}

pub struct PlotConfig {
    // --- TREND COLORS ---
    pub color_trend_up: Color32,
    pub color_trend_down: Color32,

    /// Opacity of the area fill right under the line. Fades to zero at the floor.
    pub area_fill_opacity: f32,
    pub line_width: f32,
    /// Radius of the marker drawn on the hovered sample
    pub hover_marker_radius: f32,

    // --- SIZES ---
    /// Sparkline in each table row
    pub table_sparkline: SparklineSize,
    /// Sparkline on each favorite card
    pub card_sparkline: SparklineSize,

    // --- TEXT ---
    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    pub color_favorite: Color32,
    pub color_rank_badge: Color32,

    pub color_widget_background: Color32,
    pub color_widget_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    color_trend_up: Color32::from_rgb(16, 185, 129),  // Emerald
    color_trend_down: Color32::from_rgb(239, 68, 68), // Red

    area_fill_opacity: 0.25,
    line_width: 2.0,
    hover_marker_radius: 4.0,

    table_sparkline: SparklineSize {
        width: 128.0,
        height: 64.0,
        padding: 4.0,
    },
    card_sparkline: SparklineSize {
        width: 160.0,
        height: 80.0,
        padding: 8.0,
    },

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_favorite: Color32::from_rgb(248, 113, 113),
    color_rank_badge: Color32::from_rgb(96, 165, 250),

    color_widget_background: Color32::from_black_alpha(40),
    color_widget_border: Color32::from_gray(60),
};

impl PlotConfig {
    pub fn trend_color(&self, trend_positive: bool) -> Color32 {
        if trend_positive {
            self.color_trend_up
        } else {
            self.color_trend_down
        }
    }
}
