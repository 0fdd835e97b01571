//! HTML report writer.
//!
//! Renders one section per non-empty bucket. Empty buckets produce no section
//! at all. Every interpolated value is escaped.

use std::fs::File;
use std::io::Write;

use crate::MessageRecord;
use crate::config::ExportConfig;
use crate::core::filter::FilterResult;
use crate::error::ChatsiftError;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 24px; }
.section { margin-bottom: 32px; padding-bottom: 16px; border-bottom: 2px solid #333; }
.message { margin: 8px 0; padding: 12px; border: 1px solid #ddd; border-radius: 4px; }
.sender { font-weight: bold; }
.date { color: #777; font-size: 0.9em; }
.text { margin-top: 4px; white-space: pre-wrap; }
.source { color: #b33; font-size: 0.8em; margin-top: 4px; }
.count { background: #36c; color: #fff; padding: 1px 6px; border-radius: 3px; }";

/// Writes a filter result as an HTML document.
pub fn write_html(
    result: &FilterResult,
    output_path: &str,
    config: &ExportConfig,
) -> Result<(), ChatsiftError> {
    let html = to_html(result, config);
    let mut file = File::create(output_path)?;
    file.write_all(html.as_bytes())?;
    Ok(())
}

/// Renders a filter result as an HTML document string.
///
/// ```
/// use chatsift::config::ExportConfig;
/// use chatsift::core::filter::FilterResult;
/// use chatsift::core::output::to_html;
///
/// let html = to_html(&FilterResult::default(), &ExportConfig::new());
/// assert!(html.contains(r#"<span class="total">0</span>"#));
/// assert!(!html.contains(r#"class="section""#));
/// ```
pub fn to_html(result: &FilterResult, config: &ExportConfig) -> String {
    let title = escape(&config.title);
    let mut out = String::with_capacity(1024 + result.total() * 256);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", title));
    out.push_str(&format!("<style>\n{}\n</style>\n", STYLE));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", title));
    out.push_str(&format!(
        "<p><strong>Total messages:</strong> <span class=\"total\">{}</span></p>\n",
        result.total()
    ));

    render_section(&mut out, "Messages from sender", &result.sender_matches);
    render_section(&mut out, "Replies to message", &result.reply_matches);
    render_section(&mut out, "Keyword matches", &result.keyword_matches);

    out.push_str("</body>\n</html>\n");
    out
}

fn render_section(out: &mut String, heading: &str, records: &[MessageRecord]) {
    if records.is_empty() {
        return;
    }

    out.push_str("<div class=\"section\">\n");
    out.push_str(&format!(
        "<h2>{} <span class=\"count\">{}</span></h2>\n",
        heading,
        records.len()
    ));
    for record in records {
        out.push_str("<div class=\"message\">\n");
        out.push_str(&format!("<div class=\"sender\">{}</div>\n", escape(&record.sender)));
        out.push_str(&format!("<div class=\"date\">{}</div>\n", escape(&record.timestamp)));
        out.push_str(&format!("<div class=\"text\">{}</div>\n", escape(&record.text)));
        out.push_str(&format!(
            "<div class=\"source\">Source: {}</div>\n",
            escape(&record.source_id)
        ));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
}

/// Escapes text for HTML element content and attribute values.
fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
