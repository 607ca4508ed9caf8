//! Error types for the shared crate
//!
//! Every variant's `Display` text is the message shown to the operator, so
//! the HTTP layer can flash it as is.

use thiserror::Error;

/// Why an amount was rejected by [`normalize_amount`](crate::money::normalize_amount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidAmount {
    /// Field not submitted at all
    #[error("Brak kwoty")]
    Missing,

    /// Nothing left after removing whitespace
    #[error("Kwota nie może być pusta")]
    Empty,

    /// Not a plain decimal number
    #[error("Nieprawidłowa kwota")]
    Malformed,

    /// Below zero
    #[error("Kwota nie może być ujemna")]
    Negative,
}

/// Validation failures of the print form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Mode is neither BET nor OUT
    #[error("Nieprawidłowy wybór. Wybierz BET lub OUT.")]
    InvalidMode,

    #[error(transparent)]
    InvalidAmount(#[from] InvalidAmount),
}

impl FormError {
    /// Stable machine-readable code, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidMode => "invalid_mode",
            Self::InvalidAmount(InvalidAmount::Missing) => "amount_missing",
            Self::InvalidAmount(InvalidAmount::Empty) => "amount_empty",
            Self::InvalidAmount(InvalidAmount::Malformed) => "amount_malformed",
            Self::InvalidAmount(InvalidAmount::Negative) => "amount_negative",
        }
    }
}
