// src/progress.rs
use std::path::Path;

/// Stage reporting for a scrape run. The CLI prints these; tests and
/// library callers can pass `None`.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once the output file is on disk.
    fn written(&mut self, _path: &Path, _rows: usize) {}
}

/// Collects status lines in memory.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
}

impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn written(&mut self, path: &Path, rows: usize) {
        self.lines.push(format!("Wrote {} rows → {}", rows, path.display()));
    }
}
