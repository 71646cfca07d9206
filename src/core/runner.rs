//! Application runner logic
//!
//! Handles special CLI flags, sets up logging and drives the batch on a
//! single-threaded runtime.

use crate::batch::BatchDriver;
use crate::core::config::ConfigFile;
use crate::core::{BatchSettings, CliArgs};
use crate::logging;
use anyhow::{anyhow, Context, Result};
use tracing::debug;

/// Run fontslim with the given CLI arguments.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    let _log_guard = logging::init_logging(cli_args.log_filter());

    cli_args.validate().map_err(|msg| anyhow!(msg))?;

    let config = ConfigFile::load();
    let settings = BatchSettings::resolve(&cli_args, config.as_ref());
    debug!("Resolved settings: {:?}", settings);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let driver = BatchDriver::new(settings);
    let summary = runtime.block_on(driver.run())?;

    if let Some(report_path) = &cli_args.report {
        summary.write_json(report_path)?;
        println!("Report written to {}", report_path.display());
    }

    Ok(())
}
