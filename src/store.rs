// src/store.rs
//
// Reading tables back from disk, plus the one memoized load the dashboard
// keeps for the life of the process.

use std::{
    fs::File,
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, OnceLock,
    },
};

use crate::data::PriceTable;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    /// Position of the first header equal to `name` (surrounding spaces ignored).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .as_ref()?
            .iter()
            .position(|h| h.trim() == name)
    }
}

/// Read a CSV whose first record is the header row. Rows may be ragged.
pub fn load_dataset(path: &Path) -> Result<DataSet> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = rdr.records();
    let headers = match records.next() {
        Some(rec) => Some(
            rec.map_err(|e| Error::csv(path, e))?
                .iter()
                .map(|h| h.trim_start_matches('\u{feff}').to_string())
                .collect(),
        ),
        None => None,
    };

    let mut rows = Vec::new();
    for rec in records {
        let rec = rec.map_err(|e| Error::csv(path, e))?;
        rows.push(rec.iter().map(String::from).collect());
    }

    Ok(DataSet { headers, rows })
}

/// Caches the first successful load; later calls never run the loader.
/// Failed loads are not cached, so the next call tries again.
pub struct Memo<T> {
    cell: OnceLock<Arc<T>>,
    loads: AtomicUsize,
}

impl<T> Memo<T> {
    pub const fn new() -> Self {
        Self { cell: OnceLock::new(), loads: AtomicUsize::new(0) }
    }

    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(v) = self.cell.get() {
            return Ok(Arc::clone(v));
        }
        self.loads.fetch_add(1, Ordering::Relaxed);
        let fresh = Arc::new(load()?);
        Ok(Arc::clone(self.cell.get_or_init(|| fresh)))
    }

    /// How many times the loader actually ran.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

static PREPARED: Memo<PriceTable> = Memo::new();

/// Process-wide memoized `load_and_prepare`. The first successful path wins
/// for the rest of the run.
pub fn load_and_prepare_cached(path: &Path) -> Result<Arc<PriceTable>> {
    let first = !PREPARED.is_loaded();
    let table = PREPARED.get_or_load(|| crate::data::load_and_prepare(path))?;
    if first {
        logf!("Store: Loaded {} ({} towns)", path.display(), table.towns().len());
    } else {
        logd!("Store: Cache hit for {}", path.display());
    }
    Ok(table)
}
