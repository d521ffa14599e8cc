use crate::RpcResponse;
use anyhow::{anyhow, Context};
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn get<'a>(response: &'a RpcResponse, key: &str) -> anyhow::Result<&'a Value> {
    response
        .get(key)
        .ok_or_else(|| anyhow!("node response has no field \"{}\"", key))
}

/// Deserializes a single field of the response
pub(crate) fn field<T: DeserializeOwned>(response: &RpcResponse, key: &str) -> anyhow::Result<T> {
    T::deserialize(get(response, key)?).with_context(|| format!("field \"{}\"", key))
}

/// Like [`field`], for lists and objects. The node sends "" when they are empty.
pub(crate) fn collection_field<T: DeserializeOwned + Default>(
    response: &RpcResponse,
    key: &str,
) -> anyhow::Result<T> {
    empty_as_default(get(response, key)?).with_context(|| format!("field \"{}\"", key))
}

/// Nodes answer "success": "" for commands without a result
pub(crate) fn expect_success(response: &RpcResponse) -> anyhow::Result<()> {
    get(response, "success").map(|_| ())
}

pub(crate) fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Collection<C> {
        Items(C),
        Text(String),
    }

    match Collection::<T>::deserialize(deserializer)? {
        Collection::Items(items) => Ok(items),
        Collection::Text(text) if text.is_empty() => Ok(T::default()),
        Collection::Text(text) => Err(D::Error::custom(format!(
            "expected a list or object but got \"{}\"",
            text
        ))),
    }
}
