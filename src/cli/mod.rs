//! CLI module for confdeck.
//!
//! The dispatcher runs early in `main()` so `--version` and `--help` never
//! touch the terminal:
//!
//! ```ignore
//! use confdeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! // No CLI-only command, continue to the TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{help_text, version_text, VERSION};

use crate::config::AppConfig;

/// Run a CLI-only command.
///
/// Returns the process exit code, or `None` when the TUI should start.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(0)
        }
        CliCommand::Help => {
            println!("{}", help_text());
            Some(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("Error: {}\n\n{}", message, help_text());
            Some(2)
        }
        CliCommand::Run(_) => None,
    }
}

/// Apply command-line overrides on top of an env-derived config.
pub fn apply_overrides(mut config: AppConfig, options: &RunOptions) -> AppConfig {
    if let Some(endpoint) = &options.endpoint {
        config = config.with_endpoint(endpoint.clone());
    }
    if let Some(event_name) = &options.event_name {
        config = config.with_event_name(event_name.clone());
    }
    config
}
