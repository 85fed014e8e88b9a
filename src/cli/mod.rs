//! Command-line interface.
//!
//! `ghbrowse [QUERY]` starts the TUI, searching QUERY right away when given.
//! `--version` and `--help` print and exit before the terminal is touched.

pub mod args;

pub use args::{parse_args, CliCommand};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: ghbrowse [QUERY]

Search GitHub users and browse their original repositories.

Options:
  -h, --help       Print this help
  -V, --version    Print version

Environment:
  GITHUB_TOKEN            Personal access token (raises the rate limit)
  GHBROWSE_API_URL        API root (default: https://api.github.com)
  GHBROWSE_TIMEOUT_SECS   Request timeout in seconds (default: 40)
  GHBROWSE_LOG            Log file base path (logging is off when unset)
  RUST_LOG                Log filter (default: info)";
