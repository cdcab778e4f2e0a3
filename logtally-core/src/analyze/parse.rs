use crate::analyze::constants::RECORD_PATTERN;
use crate::analyze::types::{LinePattern, LogRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static RECORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(RECORD_PATTERN).expect("record pattern is a valid regex"));

/// Parses an access log line, or returns `None` when the line does not match.
///
/// The match is unanchored: leading and trailing text around the record is
/// ignored. A line that matches only partially produces nothing.
pub fn parse_record(line: &str) -> Option<LogRecord> {
    let caps = RECORD.captures(line)?;

    Some(LogRecord {
        timestamp: caps[1].to_string(),
        method: caps[2].to_string(),
        path: caps[3].to_string(),
        status: caps[4].to_string(),
        duration: parse_duration(&caps[5]),
    })
}

/// Lenient duration parsing: anything that is not a finite float counts as 0.0.
///
/// Digit runs too long for an `f64` parse to infinity; they take the same
/// fallback so averages stay finite.
pub fn parse_duration(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => seconds,
        Ok(seconds) => {
            tracing::trace!(raw, seconds, "duration out of range, using 0");
            0.0
        }
        Err(err) => {
            tracing::trace!(raw, %err, "unparseable duration, using 0");
            0.0
        }
    }
}

/// Buckets a line by its leading level tag. The first matching tag wins.
pub fn classify_line(line: &str) -> LinePattern {
    LinePattern::TAGGED
        .iter()
        .find(|(tag, _)| line.starts_with(*tag))
        .map(|(_, pattern)| *pattern)
        .unwrap_or(LinePattern::Other)
}

/// Strips a trailing `\n` and then a trailing `\r`.
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Splits raw input into lines.
///
/// A terminator at the very end does not start a new line, so `"a\n"` is one
/// line and empty input is zero lines. Blank lines in the middle are kept.
pub fn split_lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = data.strip_suffix(b"\n").unwrap_or(data);
    let pieces = (!data.is_empty()).then(|| body.split(|b| *b == b'\n'));

    pieces.into_iter().flatten().map(trim_line_ending)
}
