// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use housing_scrape::{
    config::{options::DashboardOptions, state::AppState},
    gui, log,
};

/// 32×32 house glyph; same artwork as assets/house.ico.
fn app_icon() -> IconData {
    const N: u32 = 32;
    let roof = image::Rgba([0xC8, 0x50, 0x3C, 0xFF]);
    let wall = image::Rgba([0xF0, 0xD2, 0x96, 0xFF]);
    let door = image::Rgba([0x5A, 0x3C, 0x28, 0xFF]);
    let clear = image::Rgba([0, 0, 0, 0]);

    let rgba = image::RgbaImage::from_fn(N, N, |x, y| {
        let dx = (x as f32 - 15.5).abs();
        if (4..=14).contains(&y) && dx <= (y - 4) as f32 + 2.0 {
            roof
        } else if (15..=28).contains(&y) && (7..=24).contains(&x) {
            if y >= 20 && (14..=17).contains(&x) { door } else { wall }
        } else {
            clear
        }
    });

    IconData { rgba: rgba.into_raw(), width: N, height: N }
}

fn main() {
    log::init();

    let state = AppState::new(DashboardOptions::from_env());
    let size = [state.gui.window_w, state.gui.window_h];

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size(size),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
