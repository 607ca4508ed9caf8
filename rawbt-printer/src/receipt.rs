//! Plain-text receipt builder
//!
//! RawBT renders the intent payload as raw text, one printed line per `\n`.

/// String-based receipt builder
///
/// Accumulates UTF-8 text line by line. The result is handed to
/// [`encode`](crate::encode) as is.
#[derive(Debug, Default, Clone)]
pub struct ReceiptBuilder {
    buf: String,
}

impl ReceiptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line (paper feed)
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Finalize and return the accumulated string
    pub fn finalize(self) -> String {
        self.buf
    }

    /// Get the current buffer as a string reference
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}
