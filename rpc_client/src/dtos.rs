use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;

/// An u64 which the node sends as decimal string
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct RpcU64(u64);

impl RpcU64 {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RpcU64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RpcU64> for u64 {
    fn from(value: RpcU64) -> Self {
        value.0
    }
}

impl Display for RpcU64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for RpcU64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for RpcU64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RpcU64Visitor {})
    }
}

struct RpcU64Visitor {}

impl<'de> Visitor<'de> for RpcU64Visitor {
    type Value = RpcU64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an unsigned integer or a string containing one")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_value(Unexpected::Str(v), &self));
        }
        v.parse()
            .map(RpcU64)
            .map_err(|_| Error::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(RpcU64(v))
    }
}

/// A flag. The node answers with "1"/"0", "true"/"false" or a json bool,
/// depending on the action.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct RpcBool(bool);

impl RpcBool {
    pub fn inner(&self) -> bool {
        self.0
    }
}

impl From<bool> for RpcBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<RpcBool> for bool {
    fn from(value: RpcBool) -> Self {
        value.0
    }
}

impl Serialize for RpcBool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if self.0 { "true" } else { "false" })
    }
}

impl<'de> Deserialize<'de> for RpcBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RpcBoolVisitor {})
    }
}

struct RpcBoolVisitor {}

impl<'de> Visitor<'de> for RpcBoolVisitor {
    type Value = RpcBool;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a bool, \"1\", \"0\", \"true\" or \"false\"")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(RpcBool(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        match v {
            "1" | "true" => Ok(RpcBool(true)),
            "0" | "false" => Ok(RpcBool(false)),
            _ => Err(Error::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        match v {
            0 => Ok(RpcBool(false)),
            1 => Ok(RpcBool(true)),
            _ => Err(Error::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }
}
