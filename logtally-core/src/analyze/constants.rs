/// Upper bound on the number of ranked endpoints kept in a summary.
pub const TOP_ENDPOINTS_LIMIT: usize = 10;

/// `[timestamp] "METHOD path" status duration`
pub const RECORD_PATTERN: &str = r#"\[(.*?)\] "(.*?) (.*?)" ([0-9]{3}) ([0-9]+\.?[0-9]*)"#;

pub const ERROR_NEEDLE: &str = "error";
pub const WARNING_NEEDLE: &str = "warning";
