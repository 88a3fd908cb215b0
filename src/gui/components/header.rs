// src/gui/components/header.rs

use eframe::egui::{self, RichText};

pub const TITLE: &str = "Metro Boston housing market";
pub const SUBTITLE: &str = "Single family home prices";
pub const BY_TOWN: &str = "By Town";

pub fn draw(ui: &mut egui::Ui) {
    ui.label(RichText::new(TITLE).size(28.0).strong());
    ui.label(RichText::new(SUBTITLE).size(18.0));
}
