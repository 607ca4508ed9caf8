//! Transaction mode selected on the form

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FormError;

/// Transaction mode printed on the receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionMode {
    Bet,
    Out,
}

impl TransactionMode {
    /// All modes in form order
    pub const ALL: [TransactionMode; 2] = [TransactionMode::Bet, TransactionMode::Out];

    /// Upper-case label as printed
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bet => "BET",
            Self::Out => "OUT",
        }
    }
}

impl fmt::Display for TransactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `bet`, `Bet` and `BET` are the same mode.
impl FromStr for TransactionMode {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or(FormError::InvalidMode)
    }
}
