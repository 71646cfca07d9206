//! Core application functionality
//!
//! This module contains the application shell around the batch driver:
//! - CLI handling
//! - User configuration and resolved settings
//! - Process-level error handling and the runner

pub mod cli;
pub mod config;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config::ConfigFile;
pub use runner::run_app;
pub use settings::BatchSettings;
