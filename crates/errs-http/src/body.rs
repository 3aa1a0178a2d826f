use std::io;

use errs_core::Code;
use serde::{Deserialize, Serialize};

/// Error body presented to HTTP clients
///
/// Serialized with `code` first, then `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Slug of the application error code
    pub code: String,
    /// Message safe to expose to clients
    pub message: String,
}

impl ErrorResponse {
    /// Create a body for a code and caller-safe message
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code: code.as_str().to_owned(),
            message: message.into(),
        }
    }

    /// Encode as compact JSON with HTML-sensitive characters escaped
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}

/// Compact formatter escaping `<`, `>`, `&`, U+2028 and U+2029 inside strings
///
/// Output stays safe to embed in HTML documents.
struct HtmlSafeFormatter;

impl serde_json::ser::Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;

        for (i, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => r"\u003c",
                '>' => r"\u003e",
                '&' => r"\u0026",
                '\u{2028}' => r"\u2028",
                '\u{2029}' => r"\u2029",
                _ => continue,
            };

            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + ch.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}
