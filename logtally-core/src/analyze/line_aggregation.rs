use crate::analyze::constants::{ERROR_NEEDLE, WARNING_NEEDLE};
use crate::analyze::parse::classify_line;
use crate::analyze::types::{AnalysisResult, LinePattern, LineStatistics};
use std::collections::BTreeMap;

/// Counts lines by level tag and by "error"/"warning" mentions.
#[derive(Default)]
pub struct LineAggregator {
    total_lines: u64,
    total_length: u64,
    line_patterns: BTreeMap<LinePattern, u64>,
    error_count: u64,
    warning_count: u64,
}

impl LineAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) {
        self.record(line, line.len());
    }

    /// Records a raw line. The length counts the original bytes even when the
    /// line is not valid UTF-8.
    pub fn push_bytes(&mut self, line: &[u8]) {
        self.record(&String::from_utf8_lossy(line), line.len());
    }

    fn record(&mut self, line: &str, byte_len: usize) {
        self.total_lines += 1;
        self.total_length += byte_len as u64;

        *self.line_patterns.entry(classify_line(line)).or_insert(0) += 1;

        // Independent of the tag: "[INFO] retrying after error" still counts.
        let lower = line.to_lowercase();
        if lower.contains(ERROR_NEEDLE) {
            self.error_count += 1;
        }
        if lower.contains(WARNING_NEEDLE) {
            self.warning_count += 1;
        }
    }

    /// `file_size` is the byte length of the whole input, terminators included.
    pub fn finalize(&self, file_size: u64) -> AnalysisResult {
        let avg_line_length = if self.total_lines > 0 {
            self.total_length as f64 / self.total_lines as f64
        } else {
            0.0
        };

        tracing::info!(
            total_lines = self.total_lines,
            error_count = self.error_count,
            warning_count = self.warning_count,
            "line analysis finished"
        );

        AnalysisResult {
            total_lines: self.total_lines,
            file_size,
            line_patterns: self
                .line_patterns
                .iter()
                .map(|(pattern, count)| (pattern.as_str().to_string(), *count))
                .collect(),
            error_count: self.error_count,
            warning_count: self.warning_count,
            statistics: LineStatistics { avg_line_length },
        }
    }
}
