use crate::analyze::{
    AnalysisResult, EndpointStat, LineStatistics, LogStats, analyze_lines, save_json, to_json,
};
use crate::error::AnalyzeError;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fs;
use tempfile::tempdir;

fn sample_stats() -> LogStats {
    LogStats {
        total_requests: 2,
        status_codes: BTreeMap::from([("200".to_string(), 2)]),
        average_time: 0.25,
        top_endpoints: vec![EndpointStat {
            path: "/api/v1/users".to_string(),
            count: 2,
            avg_time: 0.25,
            method: "GET".to_string(),
        }],
        start_time: "2024-03-22 15:04:05".to_string(),
        end_time: "2024-03-22 15:04:06".to_string(),
    }
}

#[test]
fn log_stats_uses_contract_field_names() {
    let json: Value = serde_json::from_str(&to_json(&sample_stats(), false).unwrap()).unwrap();

    assert_eq!(
        json,
        json!({
            "total_requests": 2,
            "status_codes": { "200": 2 },
            "average_time": 0.25,
            "top_endpoints": [
                { "path": "/api/v1/users", "count": 2, "avg_time": 0.25, "method": "GET" }
            ],
            "start_time": "2024-03-22 15:04:05",
            "end_time": "2024-03-22 15:04:06"
        })
    );
}

#[test]
fn analysis_result_uses_contract_field_names() {
    let result = AnalysisResult {
        total_lines: 1,
        file_size: 21,
        line_patterns: BTreeMap::from([("error_log".to_string(), 1)]),
        error_count: 1,
        warning_count: 0,
        statistics: LineStatistics {
            avg_line_length: 20.0,
        },
    };

    let json: Value = serde_json::from_str(&to_json(&result, false).unwrap()).unwrap();

    assert_eq!(
        json,
        json!({
            "total_lines": 1,
            "file_size": 21,
            "line_patterns": { "error_log": 1 },
            "error_count": 1,
            "warning_count": 0,
            "statistics": { "avg_line_length": 20.0 }
        })
    );
}

#[test]
fn compact_output_is_a_single_line() {
    let out = to_json(&analyze_lines(b"[INFO] a\n[INFO] b\n"), false).unwrap();

    assert!(!out.contains('\n'));
    assert!(out.starts_with("{\"total_lines\":2,"));
}

#[test]
fn pretty_output_indents_with_four_spaces() {
    let out = to_json(&sample_stats(), true).unwrap();

    assert!(out.starts_with("{\n    \"total_requests\": 2,"));
    assert!(out.contains("\n        \"200\": 2\n"));
}

#[test]
fn save_json_round_trips_through_the_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats.json");

    // Act
    save_json(&sample_stats(), &path, true).unwrap();

    // Assert
    let loaded: LogStats = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, sample_stats());
}

#[test]
fn save_json_reports_unwritable_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("stats.json");

    let err = save_json(&sample_stats(), &path, false).unwrap_err();

    assert!(matches!(err, AnalyzeError::WriteFile { .. }));
}
