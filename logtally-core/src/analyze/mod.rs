//! Log Analysis Pipeline
//!
//! This module turns a log file into a single summary record.
//!
//! There are two ways to analyze a file:
//! - **Requests mode**: Every line that looks like an access log entry
//!   (`[timestamp] "METHOD /path" status duration`) is parsed into a record and
//!   folded into running totals: request count, status codes, average duration,
//!   per-endpoint averages and the timestamp range. At the end the busiest
//!   endpoints are ranked and cut down to a short list.
//! - **Lines mode**: Every line is counted and bucketed by its leading level tag
//!   (`[ERROR]`, `[WARN]`, ...). Lines mentioning "error" or "warning" anywhere
//!   are counted as well, independently of their tag.
//!
//! Lines that do not parse are skipped, they never fail the analysis. Only I/O
//! and serialization errors are fatal.
//!
//! The overall data processing architecture is:
//!
//! file
//! split_lines
//! parse_record / classify_line
//! StatsAggregator / LineAggregator
//! LogStats / AnalysisResult
//! render
//!

mod constants;
mod line_aggregation;
mod parse;
mod render;
mod run;
mod stats_aggregation;
mod types;

#[cfg(test)]
mod tests;

pub use constants::TOP_ENDPOINTS_LIMIT;
pub use line_aggregation::LineAggregator;
pub use parse::{classify_line, parse_duration, parse_record, split_lines, trim_line_ending};
pub use render::{save_json, to_json};
pub use run::{analyze_lines, analyze_lines_file, analyze_requests, analyze_requests_file};
pub use stats_aggregation::StatsAggregator;
pub use types::{
    AnalysisResult, EndpointKey, EndpointStat, LinePattern, LineStatistics, LogRecord, LogStats,
};
