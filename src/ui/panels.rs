use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Selection row – year, two teams, compare
// ---------------------------------------------------------------------------

/// Render the year / team selectors and the Compare button.
pub fn selection_bar(ui: &mut Ui, state: &mut AppState) {
    // Clone what we need so we can mutate state inside the combo boxes.
    let years = state.dataset.list_years().to_vec();
    let teams = state.dataset.list_teams().to_vec();

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Select Year:").size(16.0));
        let year_text = state.year.map(|y| y.to_string()).unwrap_or_default();
        egui::ComboBox::from_id_salt("year")
            .selected_text(year_text)
            .width(80.0)
            .show_ui(ui, |ui: &mut Ui| {
                for &year in &years {
                    ui.selectable_value(&mut state.year, Some(year), year.to_string());
                }
            });

        ui.add_space(16.0);
        team_picker(ui, "Select Team 1:", "first_team", &teams, &mut state.first_team);
        ui.add_space(16.0);
        team_picker(ui, "Select Team 2:", "second_team", &teams, &mut state.second_team);
        ui.add_space(16.0);

        if ui
            .button(RichText::new("Compare").size(16.0).strong())
            .clicked()
        {
            state.compare_selected();
        }
    });
    ui.add_space(8.0);
}

fn team_picker(
    ui: &mut Ui,
    label: &str,
    id: &str,
    teams: &[String],
    selected: &mut Option<String>,
) {
    ui.label(RichText::new(label).size(16.0));
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.clone().unwrap_or_default())
        .width(180.0)
        .show_ui(ui, |ui: &mut Ui| {
            for team in teams {
                ui.selectable_value(selected, Some(team.clone()), team.as_str());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let ds = &state.dataset;
        ui.label(format!(
            "{} records, {} teams, {} seasons",
            ds.len(),
            ds.list_teams().len(),
            ds.list_years().len()
        ))
        .on_hover_text(state.dataset_path.display().to_string());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom bar
// ---------------------------------------------------------------------------

/// Render the exit button.
pub fn bottom_bar(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui: &mut Ui| {
        let exit = egui::Button::new(
            RichText::new("End Program")
                .size(16.0)
                .strong()
                .color(Color32::WHITE),
        )
        .fill(Color32::from_rgb(200, 30, 30));
        if ui.add(exit).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Error modal
// ---------------------------------------------------------------------------

/// Show the pending compare error, if any, in a modal that blocks the form
/// until the user dismisses it (OK, Escape or a click outside).
pub fn error_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(msg) = state.error_message.clone() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("compare_error")).show(ctx, |ui: &mut Ui| {
        ui.set_min_width(280.0);
        ui.heading("Error");
        ui.add_space(4.0);
        ui.label(RichText::new(msg).color(Color32::RED));
        ui.add_space(8.0);
        ui.vertical_centered(|ui: &mut Ui| ui.button("OK").clicked()).inner
    });

    if modal.inner || modal.should_close() {
        state.dismiss_error();
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open team statistics")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records ({} teams, {} seasons) from {}",
                    dataset.len(),
                    dataset.list_teams().len(),
                    dataset.list_years().len(),
                    path.display()
                );
                state.set_dataset(dataset, path);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::store::TeamRecordStore;

    fn frame(ctx: &egui::Context, input: egui::RawInput, state: &mut AppState) {
        let _ = ctx.run(input, |ctx| error_window(ctx, state));
    }

    #[test]
    fn error_modal_stays_until_dismissed() {
        let ctx = egui::Context::default();
        let mut state = AppState::new(TeamRecordStore::default(), PathBuf::new());
        state.error_message = Some("Please select both teams.".into());

        frame(&ctx, egui::RawInput::default(), &mut state);
        frame(&ctx, egui::RawInput::default(), &mut state);
        assert_eq!(state.error_message.as_deref(), Some("Please select both teams."));

        let escape = egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        };
        frame(&ctx, escape, &mut state);
        assert!(state.error_message.is_none());
    }
}
