//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI, optionally searching right away
    Run { query: Option<String> },
}

/// Parse command-line arguments (including the program name).
///
/// Flags win over positional arguments; positional arguments are joined
/// with spaces into one query.
///
/// ```
/// use ghbrowse::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["ghbrowse".to_string(), "octocat".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Run { query: Some("octocat".to_string()) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut words = Vec::new();
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => words.push(arg),
        }
    }

    let query = words.join(" ");
    CliCommand::Run {
        query: (!query.trim().is_empty()).then_some(query),
    }
}
