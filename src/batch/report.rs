//! Per-font outcomes and the JSON batch report

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What happened to one input font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub original_size: u64,
    pub subset_path: PathBuf,
    pub subset_size: Option<u64>,
    pub compression_ratio: Option<f64>,
    pub ttf_path: Option<PathBuf>,
    pub ttf_size: Option<u64>,
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn new(source: PathBuf, original_size: u64, subset_path: PathBuf) -> Self {
        Self {
            source,
            original_size,
            subset_path,
            subset_size: None,
            compression_ratio: None,
            ttf_path: None,
            ttf_size: None,
            error: None,
        }
    }

    pub fn subset_succeeded(&self) -> bool {
        self.subset_size.is_some()
    }

    pub fn converted(&self) -> bool {
        self.ttf_size.is_some()
    }
}

/// Totals shown in the final status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchCounts {
    pub discovered: usize,
    pub subset: usize,
    pub converted: usize,
    pub failed: usize,
}

/// Result of a whole batch, serialized by `--report`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub started_at: DateTime<Local>,
    pub finished_at: Option<DateTime<Local>>,
    pub subsetter: String,
    pub text_file: PathBuf,
    pub dist_dir: PathBuf,
    pub discovered: usize,
    /// Set when the subsetter was missing and the batch stopped early
    pub aborted: bool,
    pub files: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn new(subsetter: String, text_file: PathBuf, dist_dir: PathBuf) -> Self {
        Self {
            started_at: Local::now(),
            finished_at: None,
            subsetter,
            text_file,
            dist_dir,
            discovered: 0,
            aborted: false,
            files: Vec::new(),
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Local::now());
    }

    pub fn counts(&self) -> BatchCounts {
        BatchCounts {
            discovered: self.discovered,
            subset: self.files.iter().filter(|f| f.subset_succeeded()).count(),
            converted: self.files.iter().filter(|f| f.converted()).count(),
            failed: self.files.iter().filter(|f| f.error.is_some()).count(),
        }
    }

    /// Write the summary as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Ok(())
    }
}
