use eframe::egui::{self, Color32, Pos2, Stroke, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::color::CategoryColors;

const CHART_HEIGHT: f32 = 240.0;

// ---------------------------------------------------------------------------
// Bar charts – ranked category → value
// ---------------------------------------------------------------------------

/// Render a vertical bar chart of (label, value) entries. Bars sit at
/// integer x positions; the axis formatter maps them back to labels.
pub fn bar_chart(ui: &mut Ui, id: &str, title: &str, entries: &[(String, f64)], colors: &CategoryColors) {
    ui.strong(title);

    let bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            Bar::new(i as f64, *value)
                .name(label)
                .width(0.7)
                .fill(colors.color_for(label))
        })
        .collect();

    let labels: Vec<String> = entries.iter().map(|(l, _)| l.clone()).collect();

    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round() as i64;
            if (mark.value - i as f64).abs() > 1e-6 {
                return String::new();
            }
            labels
                .get(usize::try_from(i).unwrap_or(usize::MAX))
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Line chart – yearly counts
// ---------------------------------------------------------------------------

/// Render the yearly unicorn-count trend as a line with markers.
pub fn yearly_line_chart(ui: &mut Ui, yearly_counts: &[(i32, usize)]) {
    ui.strong("Yearly unicorn growth");

    let points: PlotPoints = yearly_counts
        .iter()
        .map(|&(year, count)| [year as f64, count as f64])
        .collect();
    let markers: PlotPoints = yearly_counts
        .iter()
        .map(|&(year, count)| [year as f64, count as f64])
        .collect();

    Plot::new("yearly_counts")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(|mark, _range| {
            let y = mark.value.round();
            if (mark.value - y).abs() > 1e-6 {
                String::new()
            } else {
                format!("{}", y as i64)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .color(Color32::LIGHT_BLUE)
                    .width(2.0)
                    .name("Unicorn count"),
            );
            plot_ui.points(
                Points::new(markers)
                    .color(Color32::LIGHT_BLUE)
                    .radius(4.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Pie chart – sector distribution
// ---------------------------------------------------------------------------

/// Render a pie chart of (label, count) slices with a small legend.
///
/// Drawn with the raw painter since egui_plot has no pie type. Each slice
/// is tessellated as a fan of thin triangles so reflex angles render
/// correctly.
pub fn pie_chart(ui: &mut Ui, title: &str, entries: &[(String, usize)], colors: &CategoryColors) {
    ui.strong(title);

    let total: usize = entries.iter().map(|(_, n)| n).sum();
    if total == 0 {
        ui.label("No data for the current filters.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(CHART_HEIGHT, CHART_HEIGHT), egui::Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.45;

        let mut angle = -std::f32::consts::FRAC_PI_2;
        for (label, count) in entries {
            let sweep = (*count as f32 / total as f32) * std::f32::consts::TAU;
            let color = colors.color_for(label);

            // One triangle per ~2 degrees of arc.
            let steps = ((sweep / 0.035).ceil() as usize).max(1);
            let mut prev = arc_point(center, radius, angle);
            for step in 1..=steps {
                let a = angle + sweep * (step as f32 / steps as f32);
                let next = arc_point(center, radius, a);
                painter.add(egui::Shape::convex_polygon(
                    vec![center, prev, next],
                    color,
                    Stroke::NONE,
                ));
                prev = next;
            }
            angle += sweep;
        }

        ui.vertical(|ui: &mut Ui| {
            for (label, count) in entries {
                let pct = 100.0 * *count as f64 / total as f64;
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, painter) =
                        ui.allocate_painter(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    painter.rect_filled(swatch.rect, 2.0, colors.color_for(label));
                    ui.label(format!("{label}  {count} ({pct:.1}%)"));
                });
            }
        });
    });
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    Pos2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
