use crate::analyze::TOP_ENDPOINTS_LIMIT;
use serde::{Deserialize, Serialize};

/// Which summary to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Line counts by level tag plus error/warning mentions
    #[default]
    Lines,
    /// Access log statistics: status codes, latency, busiest endpoints
    Requests,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub mode: AnalysisMode,

    /// How many endpoints to keep in `top_endpoints`, at most 10.
    pub top_endpoints: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mode: AnalysisMode::default(),
            top_endpoints: TOP_ENDPOINTS_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent the JSON output.
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogtallyConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}
