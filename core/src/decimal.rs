use crate::Amount;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::de::{Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Exponents beyond this are rejected when parsing, so that a short literal
/// like "1e999999999" cannot allocate an enormous mantissa.
const MAX_EXPONENT: i64 = 4096;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal literal: \"{0}\"")]
pub struct ParseDecimalError(String);

/// An exact decimal number of arbitrary precision: `mantissa * 10^-scale`.
///
/// Equality, ordering and hashing are numeric, so `1.50` equals `1.5`.
#[derive(Clone, Debug)]
pub struct Decimal {
    mantissa: BigInt,
    scale: u32,
}

impl Decimal {
    pub fn new(mantissa: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            mantissa: mantissa.into(),
            scale,
        }
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Removes trailing zeros of the fractional part
    pub fn normalized(&self) -> Self {
        if self.mantissa.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10);
        let mut mantissa = self.mantissa.clone();
        let mut scale = self.scale;
        while scale > 0 && (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            scale -= 1;
        }
        Self { mantissa, scale }
    }

    /// Computes `floor(self * 10^digits)`
    pub fn floor_scaled(&self, digits: u32) -> BigInt {
        if digits >= self.scale {
            &self.mantissa * pow10(digits - self.scale)
        } else {
            let divisor = pow10(self.scale - digits);
            let quotient = &self.mantissa / &divisor;
            let remainder = &self.mantissa % &divisor;
            if remainder.is_negative() {
                quotient - 1
            } else {
                quotient
            }
        }
    }

    /// Computes `self / 10^digits`. Always exact.
    pub fn div_pow10(&self, digits: u32) -> Self {
        Self::new(self.mantissa.clone(), self.scale + digits).normalized()
    }

    fn mantissa_at_scale(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        &self.mantissa * pow10(scale - self.scale)
    }
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10).pow(exponent)
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseDecimalError(s.to_owned());
        let trimmed = s.trim();

        let (number, exponent) = match trimmed.find(|c: char| c == 'e' || c == 'E') {
            Some(index) => {
                let exponent = &trimmed[index + 1..];
                let exponent_digits = exponent.trim_start_matches(['+', '-']);
                if exponent_digits.is_empty()
                    || exponent.len() - exponent_digits.len() > 1
                    || !exponent_digits.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(error());
                }
                let exponent: i64 = exponent.parse().map_err(|_| error())?;
                if exponent.abs() > MAX_EXPONENT {
                    return Err(error());
                }
                (&trimmed[..index], exponent)
            }
            None => (trimmed, 0),
        };

        let (negative, unsigned) = match number.as_bytes().first() {
            Some(b'-') => (true, &number[1..]),
            Some(b'+') => (false, &number[1..]),
            _ => (false, number),
        };

        let (integer_part, fraction_part) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (unsigned, ""),
        };

        if integer_part.is_empty() && fraction_part.is_empty() {
            return Err(error());
        }
        if !integer_part
            .bytes()
            .chain(fraction_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(error());
        }

        let mut digits = String::with_capacity(integer_part.len() + fraction_part.len());
        digits.push_str(integer_part);
        digits.push_str(fraction_part);

        let mut scale = fraction_part.len() as i64 - exponent;
        if scale < 0 {
            digits.push_str(&"0".repeat((-scale) as usize));
            scale = 0;
        }

        let mut mantissa = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(error)?;
        if negative {
            mantissa = -mantissa;
        }
        let scale = u32::try_from(scale).map_err(|_| error())?;
        Ok(Self::new(mantissa, scale).normalized())
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let normalized = self.normalized();
        if normalized.scale == 0 {
            return write!(f, "{}", normalized.mantissa);
        }

        let scale = normalized.scale as usize;
        let mut digits = normalized.mantissa.abs().to_string();
        if digits.len() <= scale {
            digits.insert_str(0, &"0".repeat(scale + 1 - digits.len()));
        }
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        if normalized.mantissa.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}.{}", integer, fraction)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.mantissa_at_scale(scale)
            .cmp(&other.mantissa_at_scale(scale))
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.mantissa.hash(state);
        normalized.scale.hash(state);
    }
}

macro_rules! decimal_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Decimal::new(value, 0)
                }
            }
        )*
    };
}

decimal_from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        Decimal::new(value.number(), 0)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = ParseDecimalError;

    /// Takes the shortest decimal representation that round-trips to the given float
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ParseDecimalError(value.to_string()));
        }
        value.to_string().parse()
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor {})
    }
}

struct DecimalVisitor {}

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a decimal number or a string containing one")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse()
            .map_err(|_| serde::de::Error::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v.into())
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v.into())
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Decimal::try_from(v).map_err(|_| serde::de::Error::invalid_value(Unexpected::Float(v), &self))
    }
}
