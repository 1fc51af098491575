//! Standalone SVG sparklines, for output outside the desktop app.

use eframe::egui::Color32;

use crate::{config::PLOT_CONFIG, models::SeriesGeometry};

fn hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Render one sparkline as an SVG document: gradient area under a stroked line,
/// coloured by trend. A series too short for a path gets a "No data" label instead.
pub fn render_svg(geometry: &SeriesGeometry) -> String {
    let dims = geometry.dims;
    let (w, h) = (dims.width(), dims.height());
    let color = hex(PLOT_CONFIG.trend_color(geometry.stats.trend_positive));

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    svg.push('\n');

    if geometry.has_path() {
        svg.push_str(&format!(
            concat!(
                "  <defs>\n",
                "    <linearGradient id=\"area-fill\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\n",
                "      <stop offset=\"0%\" stop-color=\"{c}\" stop-opacity=\"{o}\"/>\n",
                "      <stop offset=\"100%\" stop-color=\"{c}\" stop-opacity=\"0\"/>\n",
                "    </linearGradient>\n",
                "  </defs>\n",
                "  <path d=\"{area}\" fill=\"url(#area-fill)\"/>\n",
                "  <path d=\"{line}\" fill=\"none\" stroke=\"{c}\" stroke-width=\"{lw}\" ",
                "stroke-linejoin=\"round\" stroke-linecap=\"round\"/>\n",
            ),
            c = color,
            o = PLOT_CONFIG.area_fill_opacity,
            area = geometry.area.to_svg_path(),
            line = geometry.line.to_svg_path(),
            lw = PLOT_CONFIG.line_width,
        ));
    } else {
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
             font-family=\"sans-serif\" font-size=\"11\" fill=\"{}\">No data</text>\n",
            w / 2.0,
            h / 2.0,
            hex(PLOT_CONFIG.color_text_subdued),
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
