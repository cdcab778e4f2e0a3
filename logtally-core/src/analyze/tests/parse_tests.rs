use crate::analyze::types::LinePattern;
use crate::analyze::{classify_line, parse_duration, parse_record, split_lines};
use pretty_assertions::assert_eq;

#[test]
fn parse_record_extracts_all_fields() {
    let record = parse_record(r#"[2024-03-22 15:04:05] "GET /api/v1/users" 200 0.123"#).unwrap();

    assert_eq!(record.timestamp, "2024-03-22 15:04:05");
    assert_eq!(record.method, "GET");
    assert_eq!(record.path, "/api/v1/users");
    assert_eq!(record.status, "200");
    assert_eq!(record.duration, 0.123);
}

#[test]
fn parse_record_accepts_integer_and_trailing_dot_durations() {
    let whole = parse_record(r#"[t] "POST /upload" 201 3"#).unwrap();
    let dotted = parse_record(r#"[t] "POST /upload" 201 3."#).unwrap();

    assert_eq!(whole.duration, 3.0);
    assert_eq!(dotted.duration, 3.0);
}

#[test]
fn parse_record_ignores_surrounding_text() {
    let record =
        parse_record(r#"host-7 [2024-01-01] "DELETE /items/9" 404 0.5 extra=1"#).unwrap();

    assert_eq!(record.method, "DELETE");
    assert_eq!(record.path, "/items/9");
    assert_eq!(record.status, "404");
}

#[test]
fn parse_record_rejects_lines_without_the_pattern() {
    assert_eq!(parse_record("plain text with no brackets"), None);
    assert_eq!(parse_record(""), None);
    // status must be three digits
    assert_eq!(parse_record(r#"[t] "GET /" 20 0.1"#), None);
    // duration is required
    assert_eq!(parse_record(r#"[t] "GET /" 200"#), None);
    // method and path must be separated by a space
    assert_eq!(parse_record(r#"[t] "GET/" 200 0.1"#), None);
}

#[test]
fn parse_record_splits_method_at_first_space() {
    let record = parse_record(r#"[t] "GET /a b" 200 1.0"#).unwrap();

    assert_eq!(record.method, "GET");
    assert_eq!(record.path, "/a b");
}

#[test]
fn parse_duration_falls_back_to_zero() {
    assert_eq!(parse_duration("0.25"), 0.25);
    assert_eq!(parse_duration("not-a-number"), 0.0);
    assert_eq!(parse_duration(""), 0.0);
}

#[test]
fn parse_duration_treats_overflow_as_zero() {
    let huge = "9".repeat(400);

    assert_eq!(parse_duration(&huge), 0.0);
    assert_eq!(parse_duration("inf"), 0.0);
    assert_eq!(parse_duration("NaN"), 0.0);
}

#[test]
fn parse_record_with_overflowing_duration_keeps_the_record() {
    let line = format!(r#"[t] "GET /x" 200 {}"#, "9".repeat(400));

    let record = parse_record(&line).unwrap();

    assert_eq!(record.path, "/x");
    assert_eq!(record.duration, 0.0);
}

#[test]
fn classify_line_uses_tag_priority() {
    assert_eq!(classify_line("[ERROR] disk failure"), LinePattern::ErrorLog);
    assert_eq!(classify_line("[WARN] low memory"), LinePattern::WarningLog);
    assert_eq!(classify_line("[INFO] started"), LinePattern::InfoLog);
    assert_eq!(classify_line("[DEBUG] x=1"), LinePattern::DebugLog);
    assert_eq!(classify_line("something with Error in it"), LinePattern::Other);
}

#[test]
fn classify_line_requires_tag_at_line_start() {
    assert_eq!(classify_line(" [ERROR] indented"), LinePattern::Other);
    assert_eq!(classify_line("[error] lowercase"), LinePattern::Other);
    assert_eq!(classify_line("[WARNING] long form"), LinePattern::Other);
}

fn collect(data: &[u8]) -> Vec<Vec<u8>> {
    split_lines(data).map(<[u8]>::to_vec).collect()
}

#[test]
fn split_lines_drops_terminators() {
    assert_eq!(collect(b""), Vec::<Vec<u8>>::new());
    assert_eq!(collect(b"\n"), vec![b"".to_vec()]);
    assert_eq!(collect(b"a\nb"), vec![b"a".to_vec(), b"b".to_vec()]);
    assert_eq!(collect(b"a\r\nb\r\n"), vec![b"a".to_vec(), b"b".to_vec()]);
    assert_eq!(
        collect(b"a\n\nb\n"),
        vec![b"a".to_vec(), b"".to_vec(), b"b".to_vec()]
    );
}
