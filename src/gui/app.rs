// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::{PriceTable, TownSeries, CHANGE_COLUMNS, PRICE_COLUMNS},
    store,
};

use super::components::{bar_chart, data_table, header, town_picker};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        header::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,

    // loaded once per process (memoized in store)
    pub table: Option<Arc<PriceTable>>,

    pub status: String,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let path = state.options.data_path.clone();

        let (table, status) = match store::load_and_prepare_cached(&path) {
            Ok(t) => {
                state.gui.selected_town = t.towns().first().cloned();
                let msg = format!("Loaded {} towns from {}", t.towns().len(), path.display());
                (Some(t), msg)
            }
            Err(e) => {
                loge!("Init: {}", e);
                (None, format!("Error: {e}"))
            }
        };

        logf!("Init: data={}, selected={:?}", path.display(), state.gui.selected_town);

        Self { state, table, status }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn selected_town(&self) -> Option<&str> {
        self.state.gui.selected_town.as_deref()
    }

    /// Selected town's values for `columns`; `None` without data or selection.
    pub fn series_for(&self, columns: &[&str]) -> Option<TownSeries> {
        let table = self.table.as_ref()?;
        let town = self.selected_town()?;
        match table.series(town, columns) {
            Ok(s) => Some(s),
            Err(e) => {
                logd!("View: {}", e);
                None
            }
        }
    }

    pub fn select_town(&mut self, town: &str) {
        if self.selected_town() == Some(town) {
            return;
        }
        logf!("UI: Town → {}", town);
        self.state.gui.selected_town = Some(s!(town));
        self.status(format!("Showing {town}"));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .show(ui, |ui| {
                    header::draw(ui);

                    ui.separator();

                    data_table::draw(ui, self);

                    ui.add_space(12.0);
                    ui.heading(header::BY_TOWN);

                    town_picker::draw(ui, self);

                    ui.add_space(8.0);

                    if let Some(prices) = self.series_for(PRICE_COLUMNS) {
                        bar_chart::draw(ui, "Single family home price", &prices);
                    }

                    if self.state.gui.show_changes {
                        if let Some(changes) = self.series_for(CHANGE_COLUMNS) {
                            ui.add_space(8.0);
                            bar_chart::draw(ui, "Price change (%)", &changes);
                        }
                    }
                });
        });
    }
}
