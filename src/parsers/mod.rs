//! Parsers for the two supported export shapes.
//!
//! - [`HtmlParser`] - Telegram Desktop HTML exports (`html` feature)
//! - [`JsonParser`] - Telegram Desktop JSON exports
//!
//! Both implement [`Parser`](crate::parser::Parser) and emit
//! [`MessageRecord`](crate::MessageRecord)s through the shared normalization
//! in [`parsing`](crate::parsing).

#[cfg(feature = "html")]
mod html;
mod json;

#[cfg(feature = "html")]
pub use html::HtmlParser;
pub use json::JsonParser;
