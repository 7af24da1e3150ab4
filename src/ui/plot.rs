use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::team_colors;
use crate::kpi::Comparison;
use crate::state::AppState;

/// Height of each KPI chart in points.
const CHART_HEIGHT: f32 = 280.0;
const BAR_WIDTH: f64 = 0.6;

// ---------------------------------------------------------------------------
// KPI charts (central panel)
// ---------------------------------------------------------------------------

/// Render the summary and one bar chart per numeric KPI, side by side.
pub fn comparison_view(ui: &mut Ui, state: &AppState) {
    let comparison = match &state.comparison {
        Some(c) => c,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Pick a year and two teams, then press Compare");
            });
            return;
        }
    };

    summary(ui, comparison);
    ui.add_space(12.0);
    ui.separator();
    kpi_charts(ui, comparison);
}

fn summary(ui: &mut Ui, comparison: &Comparison) {
    ui.vertical_centered(|ui: &mut Ui| {
        for line in comparison.summary_lines() {
            ui.label(RichText::new(line).size(15.0));
        }
    });
}

fn kpi_charts(ui: &mut Ui, comparison: &Comparison) {
    let [first_color, second_color] = team_colors();
    let charted: Vec<_> = comparison.charted_rows().collect();
    if charted.is_empty() {
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(format!(
            "Offensive KPI Comparison: {} vs {}",
            comparison.first_team, comparison.second_team
        ));
    });
    ui.add_space(8.0);

    ui.columns(charted.len(), |columns: &mut [Ui]| {
        for (ui, &(kpi, first, second)) in columns.iter_mut().zip(&charted) {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.strong(kpi.label());
            });

            let first_bar = BarChart::new(vec![
                Bar::new(0.0, first).name(&comparison.first_team),
            ])
            .name(&comparison.first_team)
            .color(first_color)
            .width(BAR_WIDTH);

            let second_bar = BarChart::new(vec![
                Bar::new(1.0, second).name(&comparison.second_team),
            ])
            .name(&comparison.second_team)
            .color(second_color)
            .width(BAR_WIDTH);

            Plot::new(("kpi_chart", kpi))
                .height(CHART_HEIGHT)
                .legend(Legend::default())
                .show_axes([false, true])
                .include_y(0.0)
                .allow_boxed_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_zoom(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(first_bar);
                    plot_ui.bar_chart(second_bar);
                });
        }
    });
}
