//! Conversion between raw amounts and BAN, the display unit.
//!
//! `to_native` and `to_display` never fail: invalid, non-positive and
//! out-of-range inputs all yield zero. Callers that need to tell a real zero
//! from a rejected input use `try_to_native` and `try_to_display`.

use crate::{Amount, Decimal, RAW_PER_BAN};
use num_bigint::BigInt;

/// Number of decimal places between raw and BAN
pub const BAN_DECIMALS: u32 = 29;

/// Largest representable raw amount, 2^128 - 1
pub const MAX_SUPPLY: Amount = Amount::MAX;

/// A value handed to the converter, classified once at the boundary
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AmountInput {
    Decimal(Decimal),
    Text(String),
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is not a number")]
    NotNumeric,
    #[error("malformed amount: \"{0}\"")]
    Malformed(String),
    #[error("amount must be greater than zero")]
    NotPositive,
    #[error("amount is smaller than one raw")]
    BelowSmallestUnit,
    #[error("amount exceeds the maximum supply")]
    Overflow,
}

/// Converts BAN to raw: `floor(ban * 10^29)`. Returns zero for anything that
/// is not a positive number or does not fit into the supply.
pub fn to_native(ban: impl Into<AmountInput>) -> Amount {
    try_to_native(ban).unwrap_or_default()
}

/// Converts raw to BAN: `raw / 10^29`. Accepts numbers and decimal strings.
/// Returns zero for malformed input and for raw values outside `1..=MAX_SUPPLY`.
pub fn to_display(raw: impl Into<AmountInput>) -> Decimal {
    try_to_display(raw).unwrap_or_default()
}

pub fn try_to_native(ban: impl Into<AmountInput>) -> Result<Amount, AmountError> {
    let ban = match ban.into() {
        AmountInput::Decimal(d) => d,
        AmountInput::Text(_) | AmountInput::Invalid => return Err(AmountError::NotNumeric),
    };

    if !ban.is_positive() {
        return Err(AmountError::NotPositive);
    }

    let raw = ban.floor_scaled(BAN_DECIMALS);
    if raw > BigInt::from(MAX_SUPPLY.number()) {
        return Err(AmountError::Overflow);
    }
    let raw = u128::try_from(&raw).map_err(|_| AmountError::Overflow)?;
    if raw == 0 {
        return Err(AmountError::BelowSmallestUnit);
    }
    Ok(Amount::raw(raw))
}

pub fn try_to_display(raw: impl Into<AmountInput>) -> Result<Decimal, AmountError> {
    let raw = match raw.into() {
        AmountInput::Decimal(d) => d,
        AmountInput::Text(text) => text
            .parse::<Decimal>()
            .map_err(|_| AmountError::Malformed(text))?,
        AmountInput::Invalid => return Err(AmountError::NotNumeric),
    };

    if raw < Decimal::from(1) {
        return Err(AmountError::BelowSmallestUnit);
    }
    if raw > Decimal::from(MAX_SUPPLY) {
        return Err(AmountError::Overflow);
    }
    Ok(raw.div_pow10(BAN_DECIMALS))
}

impl Amount {
    /// Whole BAN amount. Returns `None` if the result exceeds the supply.
    pub fn ban(value: u64) -> Option<Self> {
        (value as u128).checked_mul(RAW_PER_BAN).map(Amount::raw)
    }

    pub fn to_ban(&self) -> Decimal {
        Decimal::from(*self).div_pow10(BAN_DECIMALS)
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Decimal(value)
    }
}

impl From<&Decimal> for AmountInput {
    fn from(value: &Decimal) -> Self {
        AmountInput::Decimal(value.clone())
    }
}

impl From<Amount> for AmountInput {
    fn from(value: Amount) -> Self {
        AmountInput::Decimal(value.into())
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        match Decimal::try_from(value) {
            Ok(d) => AmountInput::Decimal(d),
            Err(_) => AmountInput::Invalid,
        }
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_owned())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

impl From<&serde_json::Value> for AmountInput {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => match n.to_string().parse::<Decimal>() {
                Ok(d) => AmountInput::Decimal(d),
                Err(_) => AmountInput::Invalid,
            },
            serde_json::Value::String(s) => AmountInput::Text(s.clone()),
            _ => AmountInput::Invalid,
        }
    }
}

macro_rules! amount_input_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AmountInput {
                fn from(value: $t) -> Self {
                    AmountInput::Decimal(value.into())
                }
            }
        )*
    };
}

amount_input_from_integer!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
