//! Batch subsetting driver
//!
//! Processes every discovered font to completion before starting the next:
//! 1. Subset it with the external tool into the dist directory
//! 2. Report sizes and the compression ratio
//! 3. Re-save the subset through the font library as `<stem>.ttf`
//!
//! A missing subsetter stops the batch. A failing subsetter run or a font
//! that cannot be re-saved is reported and the batch moves on.

pub mod convert;
pub mod discover;
pub mod report;
pub mod stats;
pub mod subsetter;

use crate::core::settings::BatchSettings;
use anyhow::{Context, Result};
use discover::{discover_fonts, FontFile};
use report::{BatchSummary, FileOutcome};
use std::fs;
use subsetter::{SubsetError, SubsetterRunner};
use tracing::{debug, info, warn};

pub use convert::{convert_to_ttf, ConvertedFont};
pub use report::BatchCounts;
pub use stats::{compression_ratio, format_megabytes};

/// Whether the loop may continue after a font
enum Flow {
    Continue,
    Abort,
}

pub struct BatchDriver {
    settings: BatchSettings,
    runner: SubsetterRunner,
}

impl BatchDriver {
    pub fn new(settings: BatchSettings) -> Self {
        let runner = SubsetterRunner::from_command_line(&settings.subsetter)
            .with_extra_args(settings.subsetter_args.clone());
        Self { settings, runner }
    }

    pub fn settings(&self) -> &BatchSettings {
        &self.settings
    }

    /// Run the whole batch.
    ///
    /// Errors are returned only for problems outside the per-font steps:
    /// the dist directory cannot be created or the source directory cannot
    /// be scanned.
    pub async fn run(&self) -> Result<BatchSummary> {
        let settings = &self.settings;
        let mut summary = BatchSummary::new(
            settings.subsetter.clone(),
            settings.text_file.clone(),
            settings.dist_dir.clone(),
        );

        fs::create_dir_all(&settings.dist_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                settings.dist_dir.display()
            )
        })?;

        if !settings.text_file.is_file() {
            warn!(
                "Content file {} does not exist; the subsetter will likely fail",
                settings.text_file.display()
            );
        }

        let fonts = discover_fonts(&settings.src_dir)?;
        summary.discovered = fonts.len();
        if fonts.is_empty() {
            println!("No font files found in {}", settings.src_dir.display());
            summary.finish();
            return Ok(summary);
        }
        println!("Found {} font files", fonts.len());

        for font in &fonts {
            let (outcome, flow) = self.process_font(font).await;
            summary.files.push(outcome);
            if let Flow::Abort = flow {
                summary.aborted = true;
                break;
            }
        }
        summary.finish();

        if !summary.aborted {
            let counts = summary.counts();
            println!(
                "All fonts processed ({} subset, {} converted, {} failed), saved to {}",
                counts.subset,
                counts.converted,
                counts.failed,
                settings.dist_dir.display()
            );
        }

        Ok(summary)
    }

    async fn process_font(&self, font: &FontFile) -> (FileOutcome, Flow) {
        let settings = &self.settings;
        let subset_path = font.subset_path(&settings.dist_dir);
        let mut outcome = FileOutcome::new(font.path.clone(), font.size, subset_path.clone());

        println!("Subsetting font: {}", font.file_name());
        if let Err(err) = self
            .runner
            .subset(&font.path, &settings.text_file, &subset_path)
            .await
        {
            outcome.error = Some(err.to_string());
            return (outcome, report_subset_error(font, &err));
        }
        // The tool reported success but wrote nothing; nothing to measure.
        let subset_size = match fs::metadata(&subset_path) {
            Ok(metadata) => metadata.len(),
            Err(_) => {
                warn!(
                    "{} exited successfully but {} is missing",
                    self.runner.program(),
                    subset_path.display()
                );
                println!("Subset font {} was not written, skipping", subset_path.display());
                outcome.error = Some("subsetter produced no output".to_string());
                return (outcome, Flow::Continue);
            }
        };
        println!("Generated subset font: {}", subset_path.display());
        let ratio = compression_ratio(font.size, subset_size);
        outcome.subset_size = Some(subset_size);
        outcome.compression_ratio = Some(ratio);
        println!("   Original size: {}", format_megabytes(font.size));
        println!("   Subset size: {}", format_megabytes(subset_size));
        println!("   Compression: {:.2}%", ratio);

        let ttf_name = format!("{}.ttf", font.stem());
        let ttf_path = font.ttf_path(&settings.dist_dir);
        println!("Converting to TTF: {}", ttf_name);
        match convert_to_ttf(&subset_path, &ttf_path).await {
            Ok(converted) => {
                info!(
                    "{}: {} tables, {} glyphs",
                    ttf_name,
                    converted.num_tables,
                    converted
                        .num_glyphs
                        .map_or_else(|| "unknown".to_string(), |n| n.to_string())
                );
                println!("Generated TTF font: {}", converted.path.display());
                println!("   TTF size: {}", format_megabytes(converted.size));
                outcome.ttf_path = Some(converted.path);
                outcome.ttf_size = Some(converted.size);
            }
            Err(err) => {
                println!("Failed to convert to TTF: {} ({:#})", ttf_name, err);
                outcome.error = Some(format!("{err:#}"));
            }
        }

        (outcome, Flow::Continue)
    }
}

/// Print a subsetter failure and decide whether the batch goes on
fn report_subset_error(font: &FontFile, err: &SubsetError) -> Flow {
    if err.is_fatal() {
        println!("{err}. Make sure it is installed, e.g. `pip install fonttools` for pyftsubset.");
        return Flow::Abort;
    }

    println!("Failed to subset font {}: {}", font.file_name(), err);
    if let Some(stderr) = err.stderr() {
        println!("   Error output: {}", stderr.trim_end());
    }
    debug!("Subset failure for {}: {:?}", font.path.display(), err);
    Flow::Continue
}
