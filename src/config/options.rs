// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Everything one scrape run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Year label; only used to name the output file.
    pub year: String,
    pub url: String,
    /// Output directory. `None` writes into the working directory.
    pub out_dir: Option<PathBuf>,
    /// Prepend a row-index column (empty header, 0..n).
    pub write_index: bool,
    /// Keep the table's header rows.
    pub include_headers: bool,
}

impl ScrapeOptions {
    pub fn new(year: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            url: url.into(),
            out_dir: None,
            write_index: false,
            include_headers: true,
        }
    }

    pub fn with_out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// `<dir>/housingData<year>.csv`
    pub fn out_path(&self) -> PathBuf {
        crate::file::output_path(&self.year, self.out_dir.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    pub data_path: PathBuf,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self { data_path: PathBuf::from(DEFAULT_DATA_FILE) }
    }
}

impl DashboardOptions {
    /// First CLI argument, then `HOUSING_DATA_FILE`, then the default file.
    pub fn resolve(arg: Option<String>, env: Option<String>) -> Self {
        let given = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        let data_path = given(arg)
            .or_else(|| given(env))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self { data_path }
    }

    pub fn from_env() -> Self {
        Self::resolve(std::env::args().nth(1), std::env::var(DATA_FILE_ENV).ok())
    }
}
