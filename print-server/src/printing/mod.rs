//! Receipt printing
//!
//! Renders the receipt text (WHAT to print). Encoding it for the RawBT app
//! is done by `rawbt-printer`.

mod renderer;

pub use renderer::{CURRENCY_LABEL, ReceiptRenderer};

/// Timezone of the receipt timestamp
pub const BUSINESS_TIMEZONE: chrono_tz::Tz = chrono_tz::Europe::Warsaw;
