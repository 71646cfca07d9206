//! Load/save normalization of subset fonts into `.ttf` files
//!
//! The subset font is parsed with read-fonts and every table is copied into
//! a fresh `FontBuilder`, which rewrites the table directory, padding and
//! checksums. Outlines are not converted: a CFF font stays CFF.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use write_fonts::read::{FontRef, TableProvider};
use write_fonts::FontBuilder;

/// A font written by [`convert_to_ttf`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFont {
    pub path: PathBuf,
    pub size: u64,
    pub num_tables: usize,
    /// From `maxp`, when the font has one
    pub num_glyphs: Option<u16>,
}

/// Re-serialize an in-memory font.
pub fn rebuild_font(data: &[u8]) -> Result<(Vec<u8>, usize, Option<u16>)> {
    let font = FontRef::new(data).map_err(|e| anyhow!("not a single sfnt font: {e}"))?;

    let mut builder = FontBuilder::new();
    let mut num_tables = 0;
    for record in font.table_directory.table_records() {
        let tag = record.tag();
        let table = font
            .table_data(tag)
            .ok_or_else(|| anyhow!("table '{tag}' lies outside the font data"))?;
        builder.add_raw(tag, table.as_bytes());
        num_tables += 1;
    }
    let num_glyphs = font.maxp().ok().map(|maxp| maxp.num_glyphs());

    Ok((builder.build(), num_tables, num_glyphs))
}

/// Load the font at `input` and save it at `output`.
///
/// `input` is read completely before `output` is written, so both may be the
/// same path.
pub async fn convert_to_ttf(input: &Path, output: &Path) -> Result<ConvertedFont> {
    let data = tokio::fs::read(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let (bytes, num_tables, num_glyphs) =
        rebuild_font(&data).with_context(|| format!("Failed to load {}", input.display()))?;

    tokio::fs::write(output, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    debug!(
        "Rebuilt {} -> {} ({} tables, {} bytes)",
        input.display(),
        output.display(),
        num_tables,
        bytes.len()
    );

    Ok(ConvertedFont {
        path: output.to_path_buf(),
        size: bytes.len() as u64,
        num_tables,
        num_glyphs,
    })
}
