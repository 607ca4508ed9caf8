//! # rawbt-printer
//!
//! RawBT thermal printer hand-off - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - Plain-text receipt building
//! - Android intent URI encoding for the RawBT app (`ru.a402d.rawbtprinter`)
//!
//! Business logic (WHAT to print) stays in application code:
//! - Receipt template → print-server
//!
//! ## Example
//!
//! ```
//! use rawbt_printer::{ReceiptBuilder, encode};
//!
//! let mut builder = ReceiptBuilder::new();
//! builder.line("BET").line("100 zł").blank();
//!
//! let uri = encode(&builder.finalize());
//! assert!(uri.as_str().starts_with("intent:BET%0A100%20z%C5%82%0A%0A#Intent;"));
//! ```

mod intent;
mod receipt;

// Re-exports
pub use intent::{IntentUri, RAWBT_PACKAGE, RAWBT_SCHEME, build_intent_uri, encode};
pub use receipt::ReceiptBuilder;
