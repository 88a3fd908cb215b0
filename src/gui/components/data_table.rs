// src/gui/components/data_table.rs
//
// Draws the full price table. Purely a view over App::table; clicking a row
// selects that town.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const TABLE_MAX_HEIGHT: f32 = 320.0;
const KEY_COL_WIDTH: f32 = 160.0;
const COL_WIDTH: f32 = 96.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.table.clone() else {
        ui.label("No table to show.");
        return;
    };

    let headers = table.headers();
    let rows = table.rows();
    let key_col = table.key_column();
    let numeric = table.numeric_columns();
    let selected_ix = app.selected_town().and_then(|t| table.row_index(t));

    let mut clicked: Option<usize> = None;

    egui::ScrollArea::horizontal()
        .id_salt("price_table_hscroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .sense(Sense::click())
                .min_scrolled_height(0.0)
                .max_scroll_height(TABLE_MAX_HEIGHT);

            for ci in 0..headers.len() {
                let w = if ci == key_col { KEY_COL_WIDTH } else { COL_WIDTH };
                builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
            }

            builder
                .header(24.0, |mut header| {
                    for (ci, h) in headers.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let text = RichText::new(h).strong();
                            if numeric.get(ci).copied().unwrap_or(false) {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(text);
                                });
                            } else {
                                ui.label(text);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let ix = row.index();
                        row.set_selected(selected_ix == Some(ix));

                        if let Some(data) = rows.get(ix) {
                            for (ci, cell) in data.iter().enumerate() {
                                row.col(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                    if numeric.get(ci).copied().unwrap_or(false) {
                                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                            ui.label(cell);
                                        });
                                    } else {
                                        ui.label(cell);
                                    }
                                });
                            }
                        }

                        if row.response().clicked() {
                            clicked = Some(ix);
                        }
                    });
                });
        });

    if let Some(ix) = clicked {
        if let Some(town) = rows.get(ix).and_then(|r| r.get(key_col)) {
            let town = town.trim().to_string();
            if table.row_index(&town).is_some() {
                app.select_town(&town);
            }
        }
    }
}
