use serde::de::{Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;

/// Number of raw units in one BAN
pub const RAW_PER_BAN: u128 = 100_000_000_000_000_000_000_000_000_000;

/// A quantity of the smallest indivisible unit ("raw").
/// The whole supply fits into an u128, so every value of this type is a valid amount.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Amount {
    raw: u128,
}

impl Amount {
    pub const MAX: Amount = Amount::raw(u128::MAX);
    pub const ZERO: Amount = Amount::raw(0);

    pub const fn raw(value: u128) -> Self {
        Self { raw: value }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub fn number(&self) -> u128 {
        self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }

    pub fn checked_add(&self, other: Amount) -> Option<Amount> {
        self.raw.checked_add(other.raw).map(Amount::raw)
    }

    pub fn checked_sub(&self, other: Amount) -> Option<Amount> {
        self.raw.checked_sub(other.raw).map(Amount::raw)
    }

    /// Parses plain decimal digits. Signs, whitespace and fractions are rejected.
    pub fn decode_dec(s: impl AsRef<str>) -> anyhow::Result<Self> {
        let s = s.as_ref();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            anyhow::bail!("invalid raw amount: \"{}\"", s);
        }
        Ok(Self::raw(s.parse::<u128>()?))
    }

    pub fn to_string_dec(self) -> String {
        self.raw.to_string()
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Amount::raw(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::raw(value as u128)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.raw, f)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string_dec())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AmountVisitor {})
    }
}

struct AmountVisitor {}

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a decimal string containing a raw amount")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Amount::decode_dec(v).map_err(|_| serde::de::Error::invalid_value(Unexpected::Str(v), &self))
    }
}
