use eframe::egui::{
    Align2, Color32, CornerRadius, FontId, Pos2, Rect, Response, Sense, Shape, Spinner, Stroke, Ui,
    Vec2, epaint::Mesh,
};

use crate::{
    app::ChartState,
    config::PLOT_CONFIG,
    domain::PricePoint,
    models::{PlotDimensions, PlotPoint, SeriesGeometry},
    ui::{
        UI_TEXT,
        styles::UiStyleExt,
        utils::{chart_window_label, format_price, format_signed_percent},
    },
    utils::{TimeUtils, format_epoch_ms},
};

/// Which of the precomputed geometries to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SparklineSlot {
    TableRow,
    FavoriteCard,
}

/// Draw the sparkline for one coin: spinner while loading, "No data" for an empty series.
pub(crate) fn render_sparkline(
    ui: &mut Ui,
    state: Option<&ChartState>,
    dims: PlotDimensions,
    slot: SparklineSlot,
) -> Response {
    let size = Vec2::new(dims.width() as f32, dims.height() as f32);
    match state {
        Some(ChartState::Ready(data)) => {
            let geometry = match slot {
                SparklineSlot::TableRow => &data.table,
                SparklineSlot::FavoriteCard => &data.card,
            };
            if geometry.has_data() {
                paint_series(ui, size, &data.points, geometry)
            } else {
                paint_placeholder(ui, size, false)
            }
        }
        Some(ChartState::Loading) | None => paint_placeholder(ui, size, true),
    }
}

/// Low / high / change line shown under the larger card charts.
pub(crate) fn render_mini_stats(ui: &mut Ui, state: Option<&ChartState>, chart_days: u32) {
    let Some(ChartState::Ready(data)) = state else {
        return;
    };
    let stats = data.card.stats;
    let (Some(min), Some(max)) = (stats.min, stats.max) else {
        return;
    };
    ui.horizontal(|ui| {
        ui.metric("Low", &format_price(min), PLOT_CONFIG.color_text_neutral);
        ui.metric("High", &format_price(max), PLOT_CONFIG.color_text_neutral);
        ui.metric(
            &chart_window_label(chart_days),
            &format_signed_percent(stats.change_percent, 1),
            PLOT_CONFIG.trend_color(stats.trend_positive),
        );
    });
}

fn paint_placeholder(ui: &mut Ui, size: Vec2, loading: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }
    paint_background(ui, rect);
    if loading {
        Spinner::new().paint_at(ui, rect.shrink(rect.height() / 4.0));
    } else {
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            &UI_TEXT.chart_no_data,
            FontId::proportional(11.0),
            PLOT_CONFIG.color_text_subdued,
        );
    }
    response
}

fn paint_background(ui: &Ui, rect: Rect) {
    ui.painter().rect(
        rect,
        CornerRadius::same(6),
        PLOT_CONFIG.color_widget_background,
        Stroke::new(1.0, PLOT_CONFIG.color_widget_border),
        eframe::egui::StrokeKind::Inside,
    );
}

fn paint_series(ui: &mut Ui, size: Vec2, points: &[PricePoint], geometry: &SeriesGeometry) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }
    paint_background(ui, rect);

    let painter = ui.painter_at(rect);
    let to_screen = |p: &PlotPoint| Pos2::new(rect.min.x + p.x as f32, rect.min.y + p.y as f32);
    let color = PLOT_CONFIG.trend_color(geometry.stats.trend_positive);

    if geometry.has_path() {
        painter.add(Shape::mesh(area_gradient_mesh(geometry, color, to_screen)));
        let line: Vec<Pos2> = geometry.line.points.iter().map(to_screen).collect();
        painter.add(Shape::line(line, Stroke::new(PLOT_CONFIG.line_width, color)));
    }

    let trend_icon = if geometry.stats.trend_positive {
        &UI_TEXT.icon_trend_up
    } else {
        &UI_TEXT.icon_trend_down
    };
    painter.text(
        rect.right_top() + Vec2::new(-4.0, 4.0),
        Align2::RIGHT_TOP,
        trend_icon,
        FontId::proportional(10.0),
        color,
    );

    // Hover sampling: snap to the nearest sample and label it
    if let Some(hover) = response.hover_pos() {
        let local_x = (hover.x - rect.min.x) as f64;
        if let Some(idx) = geometry.nearest_index(local_x) {
            if let (Some(plot), Some(sample)) = (geometry.point(idx), points.get(idx)) {
                let pos = to_screen(&plot);
                painter.circle_filled(pos, PLOT_CONFIG.hover_marker_radius, Color32::WHITE);
                painter.circle_stroke(pos, PLOT_CONFIG.hover_marker_radius, Stroke::new(2.0, color));
                let label = format!(
                    "{}\n{}",
                    format_epoch_ms(sample.time_ms, TimeUtils::HOVER_TIME_FORMAT),
                    format_price(sample.price)
                );
                painter.text(
                    rect.left_top() + Vec2::new(4.0, 4.0),
                    Align2::LEFT_TOP,
                    label,
                    FontId::proportional(9.0),
                    PLOT_CONFIG.color_text_primary,
                );
            }
        }
    }

    response
}

/// Vertical strips under the line, opaque-ish at the line and fading out at the floor.
fn area_gradient_mesh(
    geometry: &SeriesGeometry,
    color: Color32,
    to_screen: impl Fn(&PlotPoint) -> Pos2,
) -> Mesh {
    let mut mesh = Mesh::default();
    let line_len = geometry.line.len();
    // Area polygon = line points followed by the two floor corners
    let Some(floor) = geometry.area.points.get(line_len) else {
        return mesh;
    };
    let floor_y = to_screen(floor).y;
    let top_color = color.gamma_multiply(PLOT_CONFIG.area_fill_opacity);

    for p in &geometry.area.points[..line_len] {
        let top = to_screen(p);
        mesh.colored_vertex(top, top_color);
        mesh.colored_vertex(Pos2::new(top.x, floor_y), Color32::TRANSPARENT);
    }
    for i in 0..line_len.saturating_sub(1) {
        let a = (2 * i) as u32;
        mesh.add_triangle(a, a + 1, a + 2);
        mesh.add_triangle(a + 1, a + 3, a + 2);
    }
    mesh
}
