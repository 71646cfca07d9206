//! Process-level entry helpers and error handling.

/// Text printed for an error that escapes the runner
pub fn error_report(error: &anyhow::Error) -> String {
    format!(
        "\nError running fontslim:\n{error:#}\n\nTry running with --help for usage information."
    )
}

/// Handle application errors that escape the runner.
///
/// Prints to stderr and exits with code 1. Batch-level failures (missing
/// subsetter, failed fonts) never reach here; they are reported by the
/// driver and the process exits normally.
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!("{}", error_report(&error));
    std::process::exit(1);
}

/// Parse the command line, exiting with clap's message on bad input.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
