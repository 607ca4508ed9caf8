//! Amount normalization using rust_decimal for precision
//!
//! Operators type amounts the way they are written on a Polish till:
//! `100`, `100,50`, `100.5`, sometimes with stray spaces. This module turns
//! that text into a [`NormalizedAmount`], an exact non-negative value rounded
//! to grosze and rendered with a decimal comma.
//!
//! Parsing never goes through `f64`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;

use crate::error::InvalidAmount;

/// Rounding precision for monetary values (2 decimal places, half-even)
const DECIMAL_PLACES: u32 = 2;

/// Decimal separator used when rendering
const DECIMAL_COMMA: char = ',';

/// A validated, rounded, non-negative monetary amount
///
/// Rendered without a fractional part when it is whole (`100`), otherwise
/// with exactly two digits after a comma (`100,50`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAmount {
    value: Decimal,
    text: String,
}

impl NormalizedAmount {
    /// Exact rounded value
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Rendered text (`100`, `100,50`)
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Build from an already parsed decimal
    ///
    /// Fails with [`InvalidAmount::Negative`] for values below zero.
    /// Negative zero is accepted and treated as zero.
    pub fn from_decimal(mut value: Decimal) -> Result<Self, InvalidAmount> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(InvalidAmount::Negative);
        }
        value.set_sign_positive(true);

        let rounded =
            value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
        let text = render(rounded);

        Ok(Self {
            value: rounded,
            text,
        })
    }
}

impl fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for NormalizedAmount {
    type Err = InvalidAmount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_amount(Some(s))
    }
}

/// Parse and normalize a user-entered amount
///
/// - `None` → [`InvalidAmount::Missing`]
/// - all whitespace is removed, every `,` becomes `.`
/// - empty after cleanup → [`InvalidAmount::Empty`]
/// - not a decimal (plain or `1e3` exponent form) → [`InvalidAmount::Malformed`]
/// - below zero → [`InvalidAmount::Negative`]
///
/// Inputs with more than one separator (`1.234,56`) end up with two periods
/// and are rejected as malformed; grouped thousands are not supported.
pub fn normalize_amount(raw: Option<&str>) -> Result<NormalizedAmount, InvalidAmount> {
    let raw = raw.ok_or(InvalidAmount::Missing)?;

    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == DECIMAL_COMMA { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(InvalidAmount::Empty);
    }

    let value = parse_decimal(&cleaned).map_err(|e| {
        tracing::debug!(input = %raw, error = %e, "Rejected amount");
        InvalidAmount::Malformed
    })?;

    NormalizedAmount::from_decimal(value)
}

/// Plain notation first, exponent notation (`1e3`, `5E-1`) as fallback
fn parse_decimal(cleaned: &str) -> Result<Decimal, rust_decimal::Error> {
    match Decimal::from_str(cleaned) {
        Ok(value) => Ok(value),
        Err(e) if cleaned.contains(['e', 'E']) => {
            Decimal::from_scientific(cleaned).map_err(|_| e)
        }
        Err(e) => Err(e),
    }
}

/// Render a rounded value in the fixed Polish format
fn render(rounded: Decimal) -> String {
    if rounded.fract().is_zero() {
        let mut whole = rounded.trunc();
        whole.rescale(0);
        return whole.to_string();
    }

    let mut cents = rounded;
    cents.rescale(DECIMAL_PLACES);
    cents
        .to_string()
        .chars()
        .map(|c| if c == '.' { DECIMAL_COMMA } else { c })
        .collect()
}
