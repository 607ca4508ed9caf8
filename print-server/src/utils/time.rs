//! 时间工具函数 — 业务时区格式化

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Receipt timestamp layout: `DD.MM.YYYY HH:MM`
pub const RECEIPT_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Format an instant for the receipt in the business timezone
pub fn format_receipt_timestamp(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz)
        .format(RECEIPT_TIMESTAMP_FORMAT)
        .to_string()
}
