use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is not set. Keeps diagnostics quiet by default.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize the logging system with environment-based filtering
///
/// Diagnostics always go to stderr so stdout carries nothing but the summary:
/// - Uses `RUST_LOG` for level filtering (defaults to "warn" if not set)
/// - `LogFormat::Json` flattens event fields into one JSON object per line
/// - `LogFormat::Pretty` uses the human-readable formatter
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.init(),
    }
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}
