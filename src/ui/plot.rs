use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::ColorMap;

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Category bar chart
// ---------------------------------------------------------------------------

/// One bar per category, each its own legend entry so the category name is
/// readable without axis labels.
pub fn category_bars(
    ui: &mut Ui,
    id: &str,
    y_label: &str,
    series: &[(String, f64)],
    colors: &ColorMap,
) {
    if series.is_empty() {
        ui.label("No data for the current filters.");
        return;
    }

    Plot::new(id)
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .show_x(false)
        .allow_scroll(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            for (i, (category, value)) in series.iter().enumerate() {
                let bar = Bar::new(i as f64, *value).width(0.7).name(category);
                let chart = BarChart::new(vec![bar])
                    .name(category)
                    .color(colors.color_for(category));
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Line chart
// ---------------------------------------------------------------------------

/// A single line through `points` (x, y), drawn in order.
pub fn line_chart(
    ui: &mut Ui,
    id: &str,
    name: &str,
    x_label: &str,
    y_label: &str,
    points: Vec<[f64; 2]>,
) {
    if points.is_empty() {
        ui.label("No data for the current filters.");
        return;
    }

    Plot::new(id)
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(points))
                .name(name)
                .color(Color32::LIGHT_BLUE)
                .width(2.0);
            plot_ui.line(line);
        });
}
