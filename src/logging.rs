//! Tracing setup.
//!
//! The TUI owns the terminal, so logs only ever go to a file. Without a
//! configured log path no subscriber is installed and every `tracing`
//! macro is a no-op.
//!
//! Log files get a `{path}.{timestamp}.{pid}` name so that several
//! instances can run side by side.

use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install the file subscriber if `config.log_path` is set.
///
/// Returns the path of the log file actually written.
pub fn init_tracing(config: &AppConfig) -> Option<PathBuf> {
    let base = config.log_path.as_deref()?;
    let path = unique_log_path(base, chrono::Utc::now().timestamp(), std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: A tracing subscriber is already installed");
        return None;
    }

    Some(path)
}

/// `{base}.{timestamp}.{pid}`
pub fn unique_log_path(base: &Path, timestamp: i64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
