//! Batch subset OTF/TTF fonts and normalize the results to TTF.

use fontslim::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
