use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct KpiComparatorApp {
    pub state: AppState,
}

impl KpiComparatorApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for KpiComparatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Selection row ----
        egui::TopBottomPanel::top("selection").show(ctx, |ui| {
            panels::selection_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: exit ----
        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            panels::bottom_bar(ui);
        });

        // ---- Central panel: summary + charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::comparison_view(ui, &self.state);
                });
        });

        panels::error_window(ctx, &mut self.state);
    }
}
