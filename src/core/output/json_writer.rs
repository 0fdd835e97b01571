//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::config::ExportConfig;
use crate::core::filter::FilterResult;
use crate::error::ChatsiftError;

/// Writes a filter result to a JSON file.
///
/// # Format
/// ```json
/// {
///   "sender_matches": [{"id": 1, "sender": "Alice", ...}],
///   "reply_matches": [],
///   "keyword_matches": []
/// }
/// ```
pub fn write_json(
    result: &FilterResult,
    output_path: &str,
    config: &ExportConfig,
) -> Result<(), ChatsiftError> {
    let json = to_json(result, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a filter result to a JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
/// The output parses back into an equal [`FilterResult`].
pub fn to_json(result: &FilterResult, config: &ExportConfig) -> Result<String, ChatsiftError> {
    let json = if config.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
