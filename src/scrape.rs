// src/scrape.rs
//
// Page → last HTML table → housingData<year>.csv
//
// Every failure is reported as its own `Error` variant: transport, HTTP
// status, a page without tables, or the file write.

use std::path::PathBuf;

use crate::{
    config::options::ScrapeOptions,
    core::{html, net, HtmlTable},
    error::Result,
    file::{self, CsvLayout},
    progress::Progress,
};

/// Fetch `opts.url`, keep its last table, write it to `opts.out_path()`.
/// Returns the path written.
pub fn pull_data(
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PathBuf> {
    let path = opts.out_path();
    logf!("Scrape: Begin year={} url={} out={}", opts.year, opts.url, path.display());

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}", opts.url));
    }

    let result = net::http_get(&opts.url).and_then(|doc| {
        let table = select_table(&doc, &opts.url)?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!(
                "Found table: {} header row(s), {} row(s), {} column(s)",
                table.headers.len(),
                table.rows.len(),
                table.width()
            ));
        }

        let layout = CsvLayout {
            include_headers: opts.include_headers,
            write_index: opts.write_index,
        };
        file::write_table(&path, &table, layout)
    });

    match result {
        Ok(rows) => {
            logf!("Scrape: OK rows={} → {}", rows, path.display());
            if let Some(p) = progress.as_deref_mut() {
                p.written(&path, rows);
            }
            Ok(path)
        }
        Err(e) => {
            loge!("Scrape: Error year={}: {}", opts.year, e);
            Err(e)
        }
    }
}

/// The last table on the page that holds any text.
pub fn select_table(doc: &str, url: &str) -> Result<HtmlTable> {
    let table = html::last_table(doc, url)?;
    logd!("Scrape: picked table {}x{}", table.rows.len(), table.width());
    Ok(table)
}
