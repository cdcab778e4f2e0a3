use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Path of a checked-in fixture under `integration-tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Builds synthetic access logs for tests that need more volume than the
/// checked-in fixtures.
#[derive(Default)]
pub struct AccessLogBuilder {
    body: String,
    lines: usize,
}

impl AccessLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(mut self, timestamp: &str, method: &str, path: &str, status: u16, secs: f64) -> Self {
        let _ = writeln!(self.body, "[{timestamp}] \"{method} {path}\" {status} {secs:.3}");
        self.lines += 1;
        self
    }

    /// Repeats one request `hits` times with a fixed timestamp.
    pub fn hits(mut self, method: &str, path: &str, hits: usize, secs: f64) -> Self {
        for _ in 0..hits {
            self = self.request("2024-01-01 00:00:00", method, path, 200, secs);
        }
        self
    }

    pub fn noise(mut self, line: &str) -> Self {
        self.body.push_str(line);
        self.body.push('\n');
        self.lines += 1;
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn contents(&self) -> &str {
        &self.body
    }

    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, &self.body).expect("failed to write access log fixture");
        path
    }
}
