//! Telegram HTML export parser (Shape A).

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::MessageRecord;
use crate::config::ParseConfig;
use crate::error::ChatsiftError;
use crate::parser::{Parser, SourceFormat};
use crate::parsing::{REPLY_PATTERN, RawRecord, extract_reply_target, parse_message_id};

/// Parser for Telegram HTML exports.
///
/// Every `div.message` element becomes one record, including service entries
/// (date separators, pins) which end up with the `"Unknown"` sender.
///
/// # Example
///
/// ```rust
/// use chatsift::parsers::HtmlParser;
/// use chatsift::parser::Parser;
///
/// let html = r#"<div class="message default" id="message42">
///     <div class="from_name"> Alice </div>
///     <div class="text">Hi</div>
/// </div>"#;
///
/// let records = HtmlParser::new().parse_str(html, "messages.html")?;
/// assert_eq!(records[0].id, Some(42));
/// assert_eq!(records[0].sender, "Alice");
/// # Ok::<(), chatsift::ChatsiftError>(())
/// ```
pub struct HtmlParser {
    config: ParseConfig,
    message: Selector,
    from_name: Selector,
    text: Selector,
    date: Selector,
    reply_to: Selector,
    link: Selector,
    reply_pattern: Regex,
}

impl HtmlParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParseConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self {
            config,
            message: selector("div.message"),
            from_name: selector("div.from_name"),
            text: selector("div.text"),
            date: selector("div.date"),
            reply_to: selector("div.reply_to"),
            link: selector("a"),
            reply_pattern: Regex::new(REPLY_PATTERN).unwrap(),
        }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    fn parse_content(
        &self,
        content: &str,
        source_id: &str,
    ) -> Result<Vec<MessageRecord>, ChatsiftError> {
        if !content.trim().is_empty() && !content.contains('<') {
            return Err(ChatsiftError::html_parse(
                "payload contains no markup",
                source_id,
            ));
        }

        let document = Html::parse_document(content);
        let records: Vec<MessageRecord> = document
            .select(&self.message)
            .map(|element| self.raw_record(element).normalize(source_id, &self.config))
            .collect();

        debug!(source_id, records = records.len(), "normalized HTML export");
        Ok(records)
    }

    fn raw_record(&self, element: ElementRef<'_>) -> RawRecord {
        RawRecord {
            id: element.value().attr("id").and_then(parse_message_id),
            sender: first_text(element, &self.from_name),
            text: first_text(element, &self.text),
            timestamp: element
                .select(&self.date)
                .next()
                .and_then(|date| date.value().attr("title"))
                .map(str::to_string),
            reply_to_id: self.reply_target(element),
        }
    }

    fn reply_target(&self, element: ElementRef<'_>) -> Option<i64> {
        let reply = element.select(&self.reply_to).next()?;
        let link = reply.select(&self.link).next()?;
        let onclick = link.value().attr("onclick")?;
        extract_reply_target(onclick, &self.reply_pattern)
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Trimmed text of the first descendant matching `selector`.
fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|found| found.text().collect::<String>().trim().to_string())
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for HtmlParser {
    fn name(&self) -> &'static str {
        "Telegram HTML"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Html
    }

    fn parse_str(&self, content: &str, source_id: &str) -> Result<Vec<MessageRecord>, ChatsiftError> {
        self.parse_content(content, source_id)
    }
}
