// src/gui/components/town_picker.rs
//
// Single-select dropdown over the town column, plus the change-chart toggle.

use eframe::egui;

use crate::gui::app::App;

pub const PROMPT: &str = "Which town would you like to see?";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.table.clone() else {
        ui.label("No data loaded.");
        return;
    };

    let mut picked = app.state.gui.selected_town.clone();
    let shown = picked.clone().unwrap_or_else(|| s!("(none)"));

    ui.label(PROMPT);
    egui::ComboBox::from_id_salt("town_picker")
        .selected_text(shown)
        .width(260.0)
        .height(320.0)
        .show_ui(ui, |ui| {
            for town in table.towns() {
                ui.selectable_value(&mut picked, Some(town.clone()), town.as_str());
            }
        });

    if let Some(town) = picked {
        app.select_town(&town);
    }

    let before = app.state.gui.show_changes;
    ui.checkbox(&mut app.state.gui.show_changes, "Show percent change");
    if app.state.gui.show_changes != before {
        logf!("UI: show_changes → {}", app.state.gui.show_changes);
    }
}
