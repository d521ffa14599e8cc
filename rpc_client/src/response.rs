use crate::RpcError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decoded body of a node response. Always a json object; every nested
/// object is keyed by plain strings and key order is preserved as sent.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RpcResponse(Map<String, Value>);

impl RpcResponse {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn decode(body: &[u8], max_depth: u8) -> Result<Self, RpcError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value, max_depth)
    }

    pub fn from_value(value: Value, max_depth: u8) -> Result<Self, RpcError> {
        match normalize(value, 0, max_depth)? {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(RpcError::DecodeFailure(format!(
                "expected a json object but got: {}",
                other
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The node's error message, if it reported one
    pub fn error(&self) -> Option<String> {
        self.0.get("error").map(|error| match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        })
    }

    pub fn is_error(&self) -> bool {
        self.0.contains_key("error")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.into_value())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Rebuilds the tree below `value`, failing when more than `max_depth`
/// objects/arrays are nested. Scalars are kept as they are.
fn normalize(value: Value, depth: u8, max_depth: u8) -> Result<Value, RpcError> {
    match value {
        Value::Object(fields) => {
            if depth >= max_depth {
                return Err(RpcError::TooDeep(max_depth));
            }
            let mut normalized = Map::with_capacity(fields.len());
            for (key, field) in fields {
                normalized.insert(key, normalize(field, depth + 1, max_depth)?);
            }
            Ok(Value::Object(normalized))
        }
        Value::Array(items) => {
            if depth >= max_depth {
                return Err(RpcError::TooDeep(max_depth));
            }
            items
                .into_iter()
                .map(|item| normalize(item, depth + 1, max_depth))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        scalar => Ok(scalar),
    }
}
