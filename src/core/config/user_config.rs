//! User configuration file handling
//!
//! Manages settings from ~/.config/fontslim/settings.json

use crate::core::settings::{DEFAULT_DIST_DIR, DEFAULT_SRC_DIR, DEFAULT_SUBSETTER, DEFAULT_TEXT_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/fontslim/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Subsetting program (e.g., "pyftsubset")
    pub subsetter: Option<String>,
    /// Extra arguments appended after the three standard subsetter arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsetter_args: Vec<String>,
    /// Content file listing the characters to keep
    pub text_file: Option<PathBuf>,
    /// Directory scanned for fonts
    pub src_dir: Option<PathBuf>,
    /// Output directory
    pub dist_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the path to the fontslim config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("fontslim")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    ///
    /// A missing file yields `None` silently; unreadable or malformed files
    /// are logged and also yield `None`.
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// The configuration a fresh `--new-config` writes: the built-in defaults
    /// spelled out so they are easy to edit.
    pub fn with_defaults() -> Self {
        Self {
            subsetter: Some(DEFAULT_SUBSETTER.to_string()),
            subsetter_args: Vec::new(),
            text_file: Some(PathBuf::from(DEFAULT_TEXT_FILE)),
            src_dir: Some(PathBuf::from(DEFAULT_SRC_DIR)),
            dist_dir: Some(PathBuf::from(DEFAULT_DIST_DIR)),
        }
    }

    /// Initialize the complete user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/fontslim directory structure
    /// 2. A settings.json file with default values
    /// 3. A logs/ directory for application logs
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();

        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = crate::logging::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::with_defaults().save()?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}
