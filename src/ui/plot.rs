use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::SeriesColors;
use crate::state::{AppState, PlotKind};

// ---------------------------------------------------------------------------
// X/Y plot (central panel)
// ---------------------------------------------------------------------------

/// Render the data series and enabled overlays in the central panel.
pub fn xy_plot(ui: &mut Ui, state: &AppState, colors: &SeriesColors) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file or pick a sample  (File → Open…, Samples)");
        });
        return;
    }

    let x_label = state.x_axis_label();
    let y_label = state.y_axis_label();

    Plot::new("xy_plot")
        .legend(Legend::default())
        .x_axis_label(x_label.clone())
        .y_axis_label(y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = state.visible.iter().map(|p| p.to_array()).collect();
            match state.plot_kind {
                PlotKind::Line => {
                    plot_ui.line(Line::new(points).name(&y_label).color(colors.data).width(1.5));
                }
                PlotKind::Scatter => {
                    plot_ui.points(
                        Points::new(points)
                            .name(&y_label)
                            .color(colors.data)
                            .radius(3.0),
                    );
                }
            }

            let Some(stats) = &state.statistics else {
                return;
            };

            if state.overlays.regression_line {
                if let Some(reg) = stats.regression {
                    let ends: PlotPoints = [reg.left.to_array(), reg.right.to_array()]
                        .into_iter()
                        .collect();
                    plot_ui.line(
                        Line::new(ends)
                            .name(format!("y = {:.4}·x + {:.4}", reg.slope, reg.intercept))
                            .color(colors.regression)
                            .width(2.0),
                    );
                }
            }

            if state.overlays.mean_line {
                let mean: PlotPoints = stats.mean_line().iter().map(|p| p.to_array()).collect();
                plot_ui.line(
                    Line::new(mean)
                        .name(format!("mean y = {:.4}", stats.mean_y))
                        .color(colors.mean)
                        .style(egui_plot::LineStyle::dashed_loose()),
                );
            }

            if state.overlays.error_bars {
                let half = stats.error_bar_half_width(state.confidence_multiplier());
                let legend = format!("±{}σ", state.confidence_multiplier());
                for (i, p) in state.visible.iter().enumerate() {
                    let bar: PlotPoints = [[p.x, p.y - half], [p.x, p.y + half]].into_iter().collect();
                    let mut line = Line::new(bar).color(colors.error_bars).width(1.0);
                    // one legend entry for all bars
                    if i == 0 {
                        line = line.name(&legend);
                    }
                    plot_ui.line(line);
                }
            }
        });
}
