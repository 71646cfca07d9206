//! Font discovery in the source directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions picked up by the scan, in processing order
pub const FONT_EXTENSIONS: [&str; 2] = ["otf", "ttf"];

/// A font found in the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub path: PathBuf,
    pub size: u64,
}

impl FontFile {
    /// File name as displayed in progress messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without extension
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Same-named file inside `dist_dir`, keeping the raw name bytes
    pub fn subset_path(&self, dist_dir: &Path) -> PathBuf {
        match self.path.file_name() {
            Some(name) => dist_dir.join(name),
            None => dist_dir.to_path_buf(),
        }
    }

    /// `<stem>.ttf` inside `dist_dir`, keeping the raw stem bytes
    pub fn ttf_path(&self, dist_dir: &Path) -> PathBuf {
        let mut name = self
            .path
            .file_stem()
            .map(|stem| stem.to_os_string())
            .unwrap_or_default();
        name.push(".ttf");
        dist_dir.join(name)
    }
}

/// Index into `FONT_EXTENSIONS` for a path, compared case-insensitively
fn extension_rank(path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    FONT_EXTENSIONS.iter().position(|candidate| *candidate == ext)
}

/// List the fonts directly inside `dir`.
///
/// Subdirectories are not searched. All `.otf` files come first, then all
/// `.ttf` files, each group sorted by file name.
pub fn discover_fonts(dir: &Path) -> Result<Vec<FontFile>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read source directory {}", dir.display()))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        let path = entry.path();
        let Some(rank) = extension_rank(&path) else {
            continue;
        };
        let metadata = fs::metadata(&path)
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        if !metadata.is_file() {
            debug!("Skipping non-file {}", path.display());
            continue;
        }
        found.push((rank, FontFile { path, size: metadata.len() }));
    }

    found.sort_by(|(rank_a, a), (rank_b, b)| {
        rank_a
            .cmp(rank_b)
            .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
    });

    Ok(found.into_iter().map(|(_, font)| font).collect())
}
