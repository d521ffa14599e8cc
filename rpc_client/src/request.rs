use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::{borrow::Cow, fmt::Display};
use tracing::warn;

/// Name of a remote operation, e.g. "account_balance". Not validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action(Cow<'static, str>);

impl Action {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Action {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for Action {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An action plus its parameters. Serializes to a flat json object with
/// "action" as the first field.
#[derive(Clone, Debug, PartialEq)]
pub struct RpcRequest {
    action: Action,
    params: Map<String, Value>,
}

impl RpcRequest {
    pub fn new(action: impl Into<Action>, params: Map<String, Value>) -> Self {
        Self {
            action: action.into(),
            params,
        }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// A parameter called "action" replaces the action name, the same way
    /// later keys win when merging json objects.
    pub fn to_json(&self) -> Value {
        let mut body = Map::with_capacity(self.params.len() + 1);
        body.insert(
            "action".to_owned(),
            Value::String(self.action.as_str().to_owned()),
        );
        for (key, value) in &self.params {
            if key == "action" {
                warn!(action = %self.action, "rpc parameter overrides the action name");
            }
            body.insert(key.clone(), value.clone());
        }
        Value::Object(body)
    }
}

impl Serialize for RpcRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// Turns a `json!({...})` object into request parameters. Anything other
/// than an object yields no parameters.
pub fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
