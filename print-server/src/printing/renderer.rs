//! Receipt renderer
//!
//! Renders a print request into the plain-text receipt RawBT prints:
//!
//! ```text
//! IgoCheap
//! Casino printer
//!
//! BET
//! 100,50 zł
//! 17.10.2026 14:05
//! No refunds.
//!
//! ```

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rawbt_printer::ReceiptBuilder;
use shared::{NormalizedAmount, TransactionMode};

use crate::utils::time::format_receipt_timestamp;

/// Currency label appended to the amount
pub const CURRENCY_LABEL: &str = "zł";

const TITLE: &str = "IgoCheap";
const SUBTITLE: &str = "Casino printer";
const FOOTER: &str = "No refunds.";

/// Receipt renderer
#[derive(Debug, Clone)]
pub struct ReceiptRenderer {
    timezone: Tz,
}

impl ReceiptRenderer {
    /// Create a new renderer stamping receipts in `timezone`
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Render a receipt stamped with `at`
    pub fn render(
        &self,
        mode: TransactionMode,
        amount: &NormalizedAmount,
        at: DateTime<Utc>,
    ) -> String {
        let mut b = ReceiptBuilder::new();

        // Header
        b.line(TITLE).line(SUBTITLE).blank();

        // Body: mode, amount, date
        b.line(mode.as_str());
        b.line(&format!("{} {}", amount, CURRENCY_LABEL));
        b.line(&format_receipt_timestamp(at, self.timezone));

        // Footer
        b.line(FOOTER).blank();

        b.finalize()
    }

    /// Render a receipt stamped with the current time
    pub fn render_now(&self, mode: TransactionMode, amount: &NormalizedAmount) -> String {
        self.render(mode, amount, Utc::now())
    }
}
