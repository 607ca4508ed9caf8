//! Shared types for the RawBT print kiosk
//!
//! Domain values used by the print server: transaction modes, monetary
//! amounts and the validation errors shown to the operator.

pub mod error;
pub mod mode;
pub mod money;

// Re-exports
pub use error::{FormError, InvalidAmount};
pub use mode::TransactionMode;
pub use money::{NormalizedAmount, normalize_amount};
pub use rust_decimal::Decimal;
