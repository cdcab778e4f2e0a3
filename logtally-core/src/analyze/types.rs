use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One access log line broken into its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Kept as written; ordering is lexical, not calendar-aware.
    pub timestamp: String,
    pub method: String,
    pub path: String,
    /// Three ASCII digits, e.g. "200".
    pub status: String,
    /// Seconds. Unparseable values are recorded as 0.0.
    pub duration: f64,
}

impl LogRecord {
    pub fn endpoint_key(&self) -> EndpointKey {
        EndpointKey {
            method: self.method.clone(),
            path: self.path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointKey {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointStat {
    pub path: String,
    pub count: u64,
    pub avg_time: f64,
    pub method: String,
}

/// Final summary of a requests-mode analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogStats {
    pub total_requests: u64,
    pub status_codes: BTreeMap<String, u64>,
    pub average_time: f64,
    pub top_endpoints: Vec<EndpointStat>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LinePattern {
    ErrorLog,
    WarningLog,
    InfoLog,
    DebugLog,
    Other,
}

impl LinePattern {
    /// Tagged patterns in match priority order.
    pub const TAGGED: [(&'static str, LinePattern); 4] = [
        ("[ERROR]", LinePattern::ErrorLog),
        ("[WARN]", LinePattern::WarningLog),
        ("[INFO]", LinePattern::InfoLog),
        ("[DEBUG]", LinePattern::DebugLog),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinePattern::ErrorLog => "error_log",
            LinePattern::WarningLog => "warning_log",
            LinePattern::InfoLog => "info_log",
            LinePattern::DebugLog => "debug_log",
            LinePattern::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStatistics {
    pub avg_line_length: f64,
}

/// Final summary of a lines-mode analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_lines: u64,
    pub file_size: u64,
    pub line_patterns: BTreeMap<String, u64>,
    pub error_count: u64,
    pub warning_count: u64,
    pub statistics: LineStatistics,
}
