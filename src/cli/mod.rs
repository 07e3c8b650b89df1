// CLI module
// Argument parsing and the interactive menu session

mod args;
mod errors;
pub mod menu;
pub mod render;
mod session;

pub use args::CliArgs;
pub use errors::CliError;
pub use menu::MenuChoice;
pub use session::{Session, SessionEnd};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
