use crate::BananoClient;
use serde::Deserialize;
use serde_json::json;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct KeyPair {
    pub private: String,
    pub public: String,
    pub account: String,
}

/// Key generation done by the node. Key material is passed through unchecked.
pub struct Key<'a> {
    client: &'a BananoClient,
}

impl<'a> Key<'a> {
    pub(crate) fn new(client: &'a BananoClient) -> Self {
        Self { client }
    }

    /// A random key pair, or the pair at `index` derived from `seed`
    pub async fn generate(&self, seed: Option<&str>, index: u32) -> anyhow::Result<KeyPair> {
        let response = match seed {
            Some(seed) => {
                self.client
                    .request(
                        "deterministic_key",
                        json!({ "seed": seed, "index": index.to_string() }),
                    )
                    .await?
            }
            None => self.client.request("key_create", json!({})).await?,
        };
        Ok(response.deserialize()?)
    }

    /// Derives public key and account from a private key
    pub async fn expand(&self, private_key: &str) -> anyhow::Result<KeyPair> {
        let response = self
            .client
            .request("key_expand", json!({ "key": private_key }))
            .await?;
        Ok(response.deserialize()?)
    }
}
