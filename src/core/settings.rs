//! Resolved batch settings
//!
//! Merges CLI arguments, the user config file and the built-in defaults
//! into the values the batch driver runs with.

use crate::core::cli::CliArgs;
use crate::core::config::ConfigFile;
use std::path::PathBuf;

/// Directory scanned for fonts when nothing else is configured
pub const DEFAULT_SRC_DIR: &str = ".";
/// Output directory when nothing else is configured
pub const DEFAULT_DIST_DIR: &str = "./dist";
/// Content file when nothing else is configured
pub const DEFAULT_TEXT_FILE: &str = "./content.txt";
/// Subsetting program from fonttools
pub const DEFAULT_SUBSETTER: &str = "pyftsubset";

/// Everything the batch driver needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSettings {
    pub src_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub text_file: PathBuf,
    pub subsetter: String,
    pub subsetter_args: Vec<String>,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from(DEFAULT_SRC_DIR),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            text_file: PathBuf::from(DEFAULT_TEXT_FILE),
            subsetter: DEFAULT_SUBSETTER.to_string(),
            subsetter_args: Vec::new(),
        }
    }
}

impl BatchSettings {
    /// Resolve settings with priority:
    /// 1. CLI argument
    /// 2. Config file setting (~/.config/fontslim/settings.json)
    /// 3. Built-in default
    pub fn resolve(cli: &CliArgs, config: Option<&ConfigFile>) -> Self {
        let defaults = Self::default();
        let config = config.cloned().unwrap_or_default();

        Self {
            src_dir: cli.src_dir.clone().or(config.src_dir).unwrap_or(defaults.src_dir),
            dist_dir: cli
                .dist_dir
                .clone()
                .or(config.dist_dir)
                .unwrap_or(defaults.dist_dir),
            text_file: cli
                .text_file
                .clone()
                .or(config.text_file)
                .unwrap_or(defaults.text_file),
            subsetter: cli
                .subsetter
                .clone()
                .or(config.subsetter)
                .unwrap_or(defaults.subsetter),
            subsetter_args: config.subsetter_args,
        }
    }
}
