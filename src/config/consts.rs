// src/config/consts.rs

// Scrape output
pub const FILE_PREFIX: &str = "housingData";
pub const FILE_EXT: &str = "csv";

// Net config
pub const USER_AGENT: &str = concat!("housing_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Dashboard input
pub const DEFAULT_DATA_FILE: &str = "housingData2014prepared.csv";
pub const DATA_FILE_ENV: &str = "HOUSING_DATA_FILE";
pub const KEY_COLUMN: &str = "Town";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;

// Charts
pub const CHART_HEIGHT: f32 = 220.0;
pub const CHART_BAR_GAP: f32 = 0.25; // fraction of slot width left empty
