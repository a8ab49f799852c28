//! Command-line argument parsing.

/// Options for a normal TUI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// `--endpoint <url>`
    pub endpoint: Option<String>,
    /// `--event <name>`
    pub event_name: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Malformed arguments
    Invalid(String),
    /// Run the TUI application (default)
    Run(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown arguments are ignored. `--version` and `--help` win over
/// everything else.
///
/// # Examples
///
/// ```
/// use confdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["confdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--endpoint" => match args.next() {
                Some(value) => options.endpoint = Some(value),
                None => return CliCommand::Invalid("--endpoint requires a URL".to_string()),
            },
            "--event" => match args.next() {
                Some(value) => options.event_name = Some(value),
                None => return CliCommand::Invalid("--event requires a name".to_string()),
            },
            other => {
                if let Some(value) = other.strip_prefix("--endpoint=") {
                    options.endpoint = Some(value.to_string());
                } else if let Some(value) = other.strip_prefix("--event=") {
                    options.event_name = Some(value.to_string());
                }
            }
        }
    }

    CliCommand::Run(options)
}
