use crate::error::AnalyzeError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Serializes a summary. Pretty output is indented with four spaces.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, AnalyzeError> {
    if !pretty {
        return Ok(serde_json::to_string(value)?);
    }

    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;

    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Writes a summary to `path`, replacing any existing file.
///
/// Serialization happens before the file is touched, so a failure leaves no
/// partial output behind.
pub fn save_json<T: Serialize>(value: &T, path: &Path, pretty: bool) -> Result<(), AnalyzeError> {
    let mut json = to_json(value, pretty)?;
    json.push('\n');

    fs::write(path, json).map_err(|e| AnalyzeError::write_file(path, e))?;
    tracing::debug!(path = %path.display(), "summary written");
    Ok(())
}
