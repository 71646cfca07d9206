//! Command line interface for fontslim
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Every option is optional: running
//! `fontslim` with no arguments subsets the fonts in the current
//! directory using `./content.txt` and writes them to `./dist`.

use clap::Parser;
use std::path::PathBuf;

/// fontslim CLI arguments
///
/// Examples:
///   fontslim                              # Subset ./*.otf and ./*.ttf into ./dist
///   fontslim --src ~/Fonts --dist out     # Use other directories
///   fontslim --text-file chars.txt        # Keep the characters from chars.txt
///   fontslim --subsetter hb-subset        # Use another subsetting tool
///   fontslim --report dist/report.json    # Also write a JSON report
///   fontslim -vv                          # Debug logging on stderr
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "fontslim",
    version,
    about = "Batch subset fonts and normalize them to TTF",
    long_about = "fontslim finds every .otf and .ttf file in a directory, subsets each one with an external tool (pyftsubset by default) so it only keeps the characters listed in a content file, and re-saves the result as a .ttf file. Sizes and compression ratios are reported for every font."
)]
pub struct CliArgs {
    /// Directory scanned (non-recursively) for .otf and .ttf files
    #[clap(
        long = "src",
        short = 's',
        help = "Directory containing the fonts to subset",
        long_help = "Directory scanned for .otf and .ttf files. Subdirectories are not searched. Defaults to the current directory."
    )]
    pub src_dir: Option<PathBuf>,

    /// Output directory, created if absent
    #[clap(
        long = "dist",
        short = 'd',
        help = "Output directory for subset and converted fonts",
        long_help = "Output directory. It is created before any font is written. Each input produces a same-named subset file and a <stem>.ttf file. Defaults to ./dist."
    )]
    pub dist_dir: Option<PathBuf>,

    /// Text file whose characters are kept in the subset fonts
    #[clap(
        long = "text-file",
        short = 't',
        help = "File listing the characters to keep",
        long_help = "Plain text file whose characters decide which glyphs survive subsetting. It is passed to the subsetter as --text-file. Defaults to ./content.txt."
    )]
    pub text_file: Option<PathBuf>,

    /// External subsetting program
    #[clap(
        long = "subsetter",
        help = "Subsetting program to run",
        long_help = "External program invoked as `<program> <font> --text-file=<file> --output-file=<out>`. Defaults to pyftsubset from fonttools."
    )]
    pub subsetter: Option<String>,

    /// Write a JSON summary of the batch to this path
    #[clap(
        long = "report",
        help = "Write a JSON batch report",
        long_help = "After the batch finishes (or is aborted), write a JSON summary with per-font sizes, ratios and errors to this path."
    )]
    pub report: Option<PathBuf>,

    /// Increase stderr log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Initialize the user configuration directory and exit
    ///
    /// This creates the ~/.config/fontslim directory with a settings.json
    /// holding the built-in defaults, ready to be edited.
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings",
        long_help = "Initialize the ~/.config/fontslim directory with a settings.json file containing the default subsetter, content file and directories, plus a logs directory."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Only paths the user typed are checked. Defaults and config values are
    /// checked later, once they are resolved.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(src) = &self.src_dir {
            if !src.is_dir() {
                return Err(format!(
                    "Source directory does not exist: {}\nMake sure the path is correct and points to a directory.",
                    src.display()
                ));
            }
        }

        if let Some(dist) = &self.dist_dir {
            if dist.exists() && !dist.is_dir() {
                return Err(format!(
                    "Output path is not a directory: {}\nPick a directory, or a path that does not exist yet.",
                    dist.display()
                ));
            }
        }

        if let Some(subsetter) = &self.subsetter {
            if subsetter.trim().is_empty() {
                return Err("Subsetter program name is empty".to_string());
            }
        }

        Ok(())
    }

    /// Default stderr log filter for the given `-v` count
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "fontslim=warn",
            1 => "fontslim=info",
            2 => "fontslim=debug",
            _ => "fontslim=trace",
        }
    }
}
