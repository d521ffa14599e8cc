use anyhow::{anyhow, bail};
use banano_core::{to_display, try_to_native, Amount, Decimal};
use serde::Serialize;
use std::fmt::Display;

/// Unit in which balances are reported
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Raw,
    Ban,
}

/// An amount tagged with its unit
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UnitAmount {
    Raw(Amount),
    Ban(Decimal),
}

impl Unit {
    /// Expresses a raw amount sent by the node in this unit
    pub fn convert(&self, raw: Amount) -> UnitAmount {
        match self {
            Unit::Raw => UnitAmount::Raw(raw),
            Unit::Ban => UnitAmount::Ban(to_display(raw)),
        }
    }
}

impl UnitAmount {
    pub fn unit(&self) -> Unit {
        match self {
            UnitAmount::Raw(_) => Unit::Raw,
            UnitAmount::Ban(_) => Unit::Ban,
        }
    }

    pub fn as_raw(&self) -> Option<Amount> {
        match self {
            UnitAmount::Raw(amount) => Some(*amount),
            UnitAmount::Ban(_) => None,
        }
    }

    pub fn as_ban(&self) -> Option<&Decimal> {
        match self {
            UnitAmount::Raw(_) => None,
            UnitAmount::Ban(ban) => Some(ban),
        }
    }

    /// Raw amount to put into a request. Zero, non-positive and oversized
    /// BAN values are refused here so they never reach the node.
    pub fn to_raw(&self) -> anyhow::Result<Amount> {
        let raw = match self {
            UnitAmount::Raw(amount) => *amount,
            UnitAmount::Ban(ban) => {
                try_to_native(ban).map_err(|e| anyhow!("invalid amount {} BAN: {}", ban, e))?
            }
        };
        if raw.is_zero() {
            bail!("amount must not be zero");
        }
        Ok(raw)
    }
}

impl From<Amount> for UnitAmount {
    fn from(value: Amount) -> Self {
        UnitAmount::Raw(value)
    }
}

impl From<Decimal> for UnitAmount {
    fn from(value: Decimal) -> Self {
        UnitAmount::Ban(value)
    }
}

impl Display for UnitAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitAmount::Raw(amount) => write!(f, "{} raw", amount),
            UnitAmount::Ban(ban) => write!(f, "{} BAN", ban),
        }
    }
}
