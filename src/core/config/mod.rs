//! Application configuration management
//!
//! This module handles the user configuration file. CLI parsing lives in
//! `core::cli` and the merged result in `core::settings`.

pub mod user_config;

pub use user_config::ConfigFile;
