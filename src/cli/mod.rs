// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, SourceType};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments or `--help`), clap prints an error
/// message or help text and exits the process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
