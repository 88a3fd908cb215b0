// src/data.rs
//
// Dashboard view of a price table:
//
// - ColumnMap:  the fixed source → display header names.
// - PriceTable: file data reindexed to the display column order, renamed,
//               and indexed by town.
// - TownSeries: one town's values for a set of columns, transposed for a
//               single-series bar chart.

use std::collections::HashMap;
use std::path::Path;

use crate::config::consts::KEY_COLUMN;
use crate::core::sanitize::parse_number;
use crate::error::{Error, Result};
use crate::store::{self, DataSet};

/// Source columns in display order. Columns missing from a file come out empty.
pub const SOURCE_ORDER: &[&str] = &[
    "Town", "pr2013", "pr2012", "pr2008", "pr2003", "pc1y", "pc5y", "pc10y", "dm2013", "dm2012",
    "dc1y",
];

pub static DISPLAY_NAMES: ColumnMap = ColumnMap::new(&[
    ("pr2013", "2013 Price"),
    ("pr2012", "2012 Price"),
    ("pr2008", "2008 Price"),
    ("pr2003", "2003 Price"),
    ("pc1y", "1Yr Change"),
    ("pc5y", "5Yr Change"),
    ("pc10y", "10Yr Change"),
    ("dm2013", "2013 Days on Market"),
    ("dm2012", "2012 Days on Market"),
    ("dc1y", "1Yr DOM Change"),
]);

pub const PRICE_COLUMNS: &[&str] = &["2013 Price", "2012 Price", "2008 Price", "2003 Price"];
pub const CHANGE_COLUMNS: &[&str] = &["1Yr Change", "5Yr Change", "10Yr Change"];

/// Header rename table. Names not in the table pass through unchanged.
#[derive(Clone, Copy, Debug)]
pub struct ColumnMap {
    pairs: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.pairs
    }

    pub fn display_for(&self, source: &str) -> Option<&'static str> {
        self.pairs.iter().find(|(s, _)| *s == source).map(|(_, d)| *d)
    }

    pub fn source_for(&self, display: &str) -> Option<&'static str> {
        self.pairs.iter().find(|(_, d)| *d == display).map(|(s, _)| *s)
    }

    pub fn rename(&self, name: &str) -> String {
        self.display_for(name).map(String::from).unwrap_or_else(|| s!(name))
    }

    pub fn apply(&self, headers: &[String]) -> Vec<String> {
        headers.iter().map(|h| self.rename(h)).collect()
    }

    /// No source and no display name appears twice.
    pub fn is_bijection(&self) -> bool {
        let n = self.pairs.len();
        (0..n).all(|i| {
            (i + 1..n).all(|j| {
                self.pairs[i].0 != self.pairs[j].0 && self.pairs[i].1 != self.pairs[j].1
            })
        })
    }

    /// Renamed headers are left alone by a second pass iff no display name
    /// is also a source name.
    pub fn is_stable(&self) -> bool {
        self.pairs.iter().all(|(_, d)| self.display_for(d).is_none())
    }
}

/// One bar: display label, raw cell text, parsed value.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub raw: String,
    pub value: Option<f64>,
}

/// One town's values across chosen columns, in column order.
#[derive(Clone, Debug, PartialEq)]
pub struct TownSeries {
    pub town: String,
    pub bars: Vec<Bar>,
}

impl TownSeries {
    pub fn values(&self) -> Vec<Option<f64>> {
        self.bars.iter().map(|b| b.value).collect()
    }
}

#[derive(Clone, Debug)]
pub struct PriceTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    key_col: usize,
    /// town → first row holding it
    index: HashMap<String, usize>,
    towns: Vec<String>,
    numeric: Vec<bool>,
}

impl PriceTable {
    /// Reindex to `SOURCE_ORDER`, rename through `DISPLAY_NAMES`, index by town.
    pub fn prepare(ds: &DataSet, origin: &Path) -> Result<Self> {
        if ds.column(KEY_COLUMN).is_none() {
            return Err(Error::MissingKeyColumn {
                path: origin.to_path_buf(),
                column: s!(KEY_COLUMN),
            });
        }

        let (headers, rows) = reindex(ds, SOURCE_ORDER);
        let headers = DISPLAY_NAMES.apply(&headers);
        let key_col = headers
            .iter()
            .position(|h| h == KEY_COLUMN)
            .unwrap_or(0);

        let mut index = HashMap::with_capacity(rows.len());
        let mut towns = Vec::with_capacity(rows.len());
        for (i, r) in rows.iter().enumerate() {
            let town = r[key_col].trim();
            if town.is_empty() || index.contains_key(town) {
                continue;
            }
            index.insert(s!(town), i);
            towns.push(s!(town));
        }

        let numeric = numeric_flags(&rows, headers.len(), key_col);

        Ok(Self { headers, rows, key_col, index, towns, numeric })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn key_column(&self) -> usize {
        self.key_col
    }

    /// Distinct towns in file order.
    pub fn towns(&self) -> &[String] {
        &self.towns
    }

    pub fn row_index(&self, town: &str) -> Option<usize> {
        self.index.get(town.trim()).copied()
    }

    pub fn row_for(&self, town: &str) -> Option<&[String]> {
        self.row_index(town).map(|i| self.rows[i].as_slice())
    }

    /// `town`'s cells for `columns`, transposed into one series.
    /// Unknown column names give empty bars.
    pub fn series(&self, town: &str, columns: &[&str]) -> Result<TownSeries> {
        let row = self
            .row_for(town)
            .ok_or_else(|| Error::UnknownTown(s!(town)))?;

        let bars = columns
            .iter()
            .map(|&col| {
                let raw = self
                    .headers
                    .iter()
                    .position(|h| h == col)
                    .and_then(|ci| row.get(ci))
                    .cloned()
                    .unwrap_or_default();
                Bar { label: s!(col), value: parse_number(&raw), raw }
            })
            .collect();

        Ok(TownSeries { town: s!(town.trim()), bars })
    }

    /// Columns whose non-empty cells all parse as numbers.
    pub fn numeric_columns(&self) -> &[bool] {
        &self.numeric
    }
}

fn numeric_flags(rows: &[Vec<String>], width: usize, key_col: usize) -> Vec<bool> {
    (0..width)
        .map(|ci| {
            ci != key_col
                && rows
                    .iter()
                    .filter_map(|r| r.get(ci))
                    .filter(|c| !c.trim().is_empty())
                    .all(|c| parse_number(c).is_some())
        })
        .collect()
}

/// Pick `order` columns out of `ds` by header name. Absent columns become
/// empty cells; columns not in `order` are dropped.
pub fn reindex(ds: &DataSet, order: &[&str]) -> (Vec<String>, Vec<Vec<String>>) {
    let picks: Vec<Option<usize>> = order.iter().map(|name| ds.column(name)).collect();

    let headers = order.iter().map(|s| s!(*s)).collect();
    let rows = ds
        .rows
        .iter()
        .map(|r| {
            picks
                .iter()
                .map(|p| p.and_then(|ci| r.get(ci)).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    (headers, rows)
}

/// Read + reshape in one step (uncached; see `store::load_and_prepare_cached`).
pub fn load_and_prepare(path: &Path) -> Result<PriceTable> {
    let ds = store::load_dataset(path)?;
    logd!(
        "Data: Read {} rows, {} columns from {}",
        ds.row_count(),
        ds.header_count(),
        path.display()
    );
    PriceTable::prepare(&ds, path)
}
