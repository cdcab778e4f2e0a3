use crate::analyze::line_aggregation::LineAggregator;
use crate::analyze::parse::{split_lines, trim_line_ending};
use crate::analyze::stats_aggregation::StatsAggregator;
use crate::analyze::types::{AnalysisResult, LogStats};
use crate::conf::AnalysisConfig;
use crate::error::AnalyzeError;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Streams access log lines from `reader` into a [`StatsAggregator`].
///
/// The first read error aborts the analysis; nothing is returned for the
/// lines consumed before it.
pub fn analyze_requests<R: BufRead>(
    mut reader: R,
    config: &AnalysisConfig,
) -> io::Result<LogStats> {
    let mut agg = StatsAggregator::new(config.top_endpoints);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        agg.push_line(&line);
    }

    Ok(agg.finalize())
}

pub fn analyze_requests_file(
    path: &Path,
    config: &AnalysisConfig,
) -> Result<LogStats, AnalyzeError> {
    tracing::debug!(path = %path.display(), "analyzing requests");

    let file = File::open(path).map_err(|e| AnalyzeError::read_file(path, e))?;
    analyze_requests(BufReader::new(file), config).map_err(|e| AnalyzeError::read_file(path, e))
}

/// Classifies every line of `data`. `file_size` is `data.len()`.
pub fn analyze_lines(data: &[u8]) -> AnalysisResult {
    let mut agg = LineAggregator::new();

    for line in split_lines(data) {
        agg.push_bytes(line);
    }

    agg.finalize(data.len() as u64)
}

pub fn analyze_lines_file(path: &Path) -> Result<AnalysisResult, AnalyzeError> {
    tracing::debug!(path = %path.display(), "analyzing lines");

    let data = fs::read(path).map_err(|e| AnalyzeError::read_file(path, e))?;
    Ok(analyze_lines(&data))
}
