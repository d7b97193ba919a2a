//! JSON try-parse and pretty-print helpers.
//!
//! Parse failures are not errors here: callers branch on the `Result` to fall
//! back to plain-text handling.

use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn try_parse(&self, text: &str) -> Result<Value, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn pretty_print(&self, value: &Value) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(value)
    }

    pub fn is_json(&self, text: &str) -> bool {
        self.try_parse(text).is_ok()
    }

    /// Indented form of `text` when it parses as JSON, otherwise `text` itself.
    pub fn format_or_raw(&self, text: &str) -> Result<String, serde_json::Error> {
        match self.try_parse(text) {
            Ok(value) => self.pretty_print(&value),
            Err(_) => Ok(text.to_string()),
        }
    }
}
