//! Optimizer run summary and size formatting.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{IconsetError, Result};

use super::{reduction, Optimized};

/// All files processed in one optimizer run.
#[derive(Debug, Default, Serialize)]
pub struct OptimizeReport {
    pub files: Vec<Optimized>,
}

#[derive(Serialize)]
struct Summary<'a> {
    files: &'a [Optimized],
    total_before: u64,
    total_after: u64,
    reduction: f64,
}

impl OptimizeReport {
    pub fn push(&mut self, file: Optimized) {
        self.files.push(file);
    }

    pub fn total_before(&self) -> u64 {
        self.files.iter().map(|f| f.before).sum()
    }

    pub fn total_after(&self) -> u64 {
        self.files.iter().map(|f| f.after).sum()
    }

    /// Overall reduction in percent; `0.0` when nothing was processed.
    pub fn reduction(&self) -> f64 {
        reduction(self.total_before(), self.total_after())
    }

    /// Render the report, with totals, as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        let summary = Summary {
            files: &self.files,
            total_before: self.total_before(),
            total_after: self.total_after(),
            reduction: self.reduction(),
        };
        serde_json::to_string_pretty(&summary).map_err(|e| IconsetError::Build {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })
    }

    /// Write the JSON report to `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| IconsetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write report: {}", e),
        })
    }
}

/// Format a byte count: `512B`, `1.5KB`, `3.2MB`.
pub fn human_size(size: u64) -> String {
    const UNITS: [&str; 3] = ["B", "KB", "MB"];

    let mut value = size as f64;
    let mut unit = 0;
    while unit + 1 < UNITS.len() && value >= 1024.0 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{}B", size)
    } else {
        format!("{:.1}{}", value, UNITS[unit])
    }
}
