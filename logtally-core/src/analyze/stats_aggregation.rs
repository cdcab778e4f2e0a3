use crate::analyze::constants::TOP_ENDPOINTS_LIMIT;
use crate::analyze::parse::parse_record;
use crate::analyze::types::{EndpointKey, EndpointStat, LogRecord, LogStats};
use ahash::RandomState;
use std::collections::{BTreeMap, HashMap};

struct TimeBounds {
    start: String,
    end: String,
}

impl TimeBounds {
    fn observe(&mut self, timestamp: &str) {
        // Lexical comparison. Start moves on strictly smaller, end on greater or equal.
        if timestamp < self.start.as_str() {
            self.start = timestamp.to_string();
        }
        if timestamp >= self.end.as_str() {
            self.end = timestamp.to_string();
        }
    }
}

/// Running totals over parsed access log records.
///
/// Feed it with [`push`](Self::push) or [`push_line`](Self::push_line) in file
/// order, then call [`finalize`](Self::finalize) to get the ranked summary.
pub struct StatsAggregator {
    top_limit: usize,
    total_requests: u64,
    skipped_lines: u64,
    total_time: f64,
    status_codes: BTreeMap<String, u64>,
    endpoints: HashMap<EndpointKey, EndpointStat, RandomState>,
    bounds: Option<TimeBounds>,
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new(TOP_ENDPOINTS_LIMIT)
    }
}

impl StatsAggregator {
    /// `top_limit` is clamped to `1..=TOP_ENDPOINTS_LIMIT`.
    pub fn new(top_limit: usize) -> Self {
        Self {
            top_limit: top_limit.clamp(1, TOP_ENDPOINTS_LIMIT),
            total_requests: 0,
            skipped_lines: 0,
            total_time: 0.0,
            status_codes: BTreeMap::new(),
            endpoints: HashMap::default(),
            bounds: None,
        }
    }

    /// Parses and records one line. Returns `false` if the line was skipped.
    pub fn push_line(&mut self, line: &str) -> bool {
        match parse_record(line) {
            Some(record) => {
                self.push(&record);
                true
            }
            None => {
                self.skipped_lines += 1;
                tracing::trace!(line, "skipping line without access log record");
                false
            }
        }
    }

    pub fn push(&mut self, record: &LogRecord) {
        self.total_requests += 1;
        *self.status_codes.entry(record.status.clone()).or_insert(0) += 1;
        self.total_time += record.duration;

        let stat = self
            .endpoints
            .entry(record.endpoint_key())
            .or_insert_with(|| EndpointStat {
                path: record.path.clone(),
                count: 0,
                avg_time: 0.0,
                method: record.method.clone(),
            });
        stat.count += 1;
        stat.avg_time += (record.duration - stat.avg_time) / stat.count as f64;

        match &mut self.bounds {
            Some(bounds) => bounds.observe(&record.timestamp),
            None => {
                self.bounds = Some(TimeBounds {
                    start: record.timestamp.clone(),
                    end: record.timestamp.clone(),
                })
            }
        }
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub fn skipped_lines(&self) -> u64 {
        self.skipped_lines
    }

    /// Number of distinct (method, path) pairs seen so far.
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Builds the summary from the current totals.
    ///
    /// Endpoints are ranked by count, busiest first. Equal counts are ordered
    /// by method and then path so the output is reproducible.
    pub(crate) fn snapshot(&self) -> LogStats {
        let mut top_endpoints: Vec<EndpointStat> = self.endpoints.values().cloned().collect();
        top_endpoints.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.method.cmp(&b.method))
                .then_with(|| a.path.cmp(&b.path))
        });
        top_endpoints.truncate(self.top_limit);

        let average_time = if self.total_requests > 0 {
            self.total_time / self.total_requests as f64
        } else {
            0.0
        };

        let (start_time, end_time) = self
            .bounds
            .as_ref()
            .map(|b| (b.start.clone(), b.end.clone()))
            .unwrap_or_default();

        LogStats {
            total_requests: self.total_requests,
            status_codes: self.status_codes.clone(),
            average_time,
            top_endpoints,
            start_time,
            end_time,
        }
    }

    pub fn finalize(&self) -> LogStats {
        let stats = self.snapshot();
        tracing::info!(
            total_requests = stats.total_requests,
            skipped_lines = self.skipped_lines,
            endpoints = self.endpoints.len(),
            "request analysis finished"
        );
        stats
    }
}
