// src/file.rs

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use crate::config::consts::{FILE_EXT, FILE_PREFIX};
use crate::core::{HtmlTable, sanitize::sanitize_label};
use crate::error::{Error, Result};

/// `housingData<year>.csv`, inside `dir` when one is given.
pub fn output_path(year: &str, dir: Option<&Path>) -> PathBuf {
    let file_name = join!(FILE_PREFIX, &sanitize_label(year), ".", FILE_EXT);
    match dir {
        Some(d) if !d.as_os_str().is_empty() => d.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// What goes into the CSV besides the body rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsvLayout {
    pub include_headers: bool,
    /// Leading row-index column: empty on header lines, 0..n on body rows.
    pub write_index: bool,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self { include_headers: true, write_index: false }
    }
}

/// Create/truncate `path` and write the table. Returns the body row count.
pub fn write_table(path: &Path, table: &HtmlTable, layout: CsvLayout) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut w = csv::WriterBuilder::new().from_writer(file);
    let csv_err = |e| Error::csv(path, e);

    if layout.include_headers {
        for h in &table.headers {
            if layout.write_index {
                w.write_record(std::iter::once("").chain(h.iter().map(String::as_str)))
                    .map_err(csv_err)?;
            } else {
                w.write_record(h).map_err(csv_err)?;
            }
        }
    }

    for (i, r) in table.rows.iter().enumerate() {
        if layout.write_index {
            let ix = i.to_string();
            w.write_record(std::iter::once(ix.as_str()).chain(r.iter().map(String::as_str)))
                .map_err(csv_err)?;
        } else {
            w.write_record(r).map_err(csv_err)?;
        }
    }

    w.flush().map_err(|e| Error::io(path, e))?;
    Ok(table.rows.len())
}
