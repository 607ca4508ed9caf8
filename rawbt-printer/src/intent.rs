//! Android intent URI encoding for the RawBT printer app
//!
//! RawBT registers the `rawbt` scheme and prints the text carried in the
//! URI. The printed text must sit in a single URI component, so every byte
//! outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) is percent-encoded,
//! newlines (`%0A`) and `/` (`%2F`) included.
//!
//! Wire format:
//!
//! ```text
//! intent:<percent-encoded-text>#Intent;scheme=rawbt;package=ru.a402d.rawbtprinter;end
//! ```

use std::fmt;

use tracing::instrument;

/// Intent scheme registered by the RawBT app
pub const RAWBT_SCHEME: &str = "rawbt";

/// Android package of the RawBT app
pub const RAWBT_PACKAGE: &str = "ru.a402d.rawbtprinter";

const PREFIX: &str = "intent:";

/// A complete RawBT intent URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentUri {
    uri: String,
    payload_end: usize,
}

impl IntentUri {
    /// The whole URI
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// The percent-encoded text between `intent:` and `#Intent;`
    pub fn payload(&self) -> &str {
        &self.uri[PREFIX.len()..self.payload_end]
    }
}

impl fmt::Display for IntentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// Encode receipt text into a RawBT intent URI
///
/// Pure and infallible; empty text yields an intent with an empty payload.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn encode(text: &str) -> IntentUri {
    let payload = urlencoding::encode(text);

    let mut uri = String::with_capacity(PREFIX.len() + payload.len() + 64);
    uri.push_str(PREFIX);
    uri.push_str(&payload);
    let payload_end = uri.len();
    uri.push_str("#Intent;scheme=");
    uri.push_str(RAWBT_SCHEME);
    uri.push_str(";package=");
    uri.push_str(RAWBT_PACKAGE);
    uri.push_str(";end");

    tracing::debug!(uri_len = uri.len(), "Built RawBT intent");

    IntentUri { uri, payload_end }
}

/// Encode optional text; `None` is treated as empty text
pub fn build_intent_uri(text: Option<&str>) -> IntentUri {
    encode(text.unwrap_or_default())
}
