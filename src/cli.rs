// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::{
    config::options::ScrapeOptions,
    error::Result,
    progress::Progress,
    scrape,
};

/// Save the last HTML table of a page as housingData<YEAR>.csv
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Year label used in the output file name
    #[arg(short, long)]
    pub year: String,

    /// Page holding the price table
    #[arg(short, long)]
    pub url: String,

    /// Output directory (created if missing); defaults to the working directory
    #[arg(short, long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Prepend a row-index column
    #[arg(long)]
    pub index: bool,

    /// Leave the table's header rows out
    #[arg(long)]
    pub no_header: bool,
}

impl From<Args> for ScrapeOptions {
    fn from(a: Args) -> Self {
        Self {
            year: a.year,
            url: a.url,
            out_dir: a.out_dir,
            write_index: a.index,
            include_headers: !a.no_header,
        }
    }
}

/// Prints stages to stderr so stdout carries only the written path.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn written(&mut self, path: &Path, rows: usize) {
        eprintln!("Wrote {} rows to {}", rows, path.display());
    }
}

pub fn run() -> Result<PathBuf> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<PathBuf> {
    let opts = ScrapeOptions::from(args);
    scrape::pull_data(&opts, Some(&mut CliProgress))
}
