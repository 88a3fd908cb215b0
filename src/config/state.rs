// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::DashboardOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Town picked in the dropdown (display key value)
    pub selected_town: Option<String>,

    /// Draw the percent-change chart under the price chart
    pub show_changes: bool,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_town: None,
            show_changes: true,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: DashboardOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: DashboardOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
