use crate::{
    parse::{collection_field, expect_success, field},
    BananoClient, RpcU64, Unit, UnitAmount,
};
use banano_core::Amount;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Map, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockCount {
    pub count: u64,
    pub unchecked: u64,
    pub cemented: Option<u64>,
}

#[derive(Deserialize)]
struct BlockCountDto {
    count: RpcU64,
    unchecked: RpcU64,
    cemented: Option<RpcU64>,
}

impl From<BlockCountDto> for BlockCount {
    fn from(value: BlockCountDto) -> Self {
        Self {
            count: value.count.inner(),
            unchecked: value.unchecked.inner(),
            cemented: value.cemented.map(|c| c.inner()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VersionInfo {
    pub rpc_version: String,
    pub store_version: String,
    pub protocol_version: String,
    pub node_vendor: String,
    #[serde(default)]
    pub store_vendor: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub network_identifier: Option<String>,
    #[serde(default)]
    pub build_info: Option<String>,
}

/// Older nodes list the accounts, newer ones map them to details
#[derive(Deserialize)]
#[serde(untagged)]
enum OnlineRepresentatives {
    Accounts(Vec<String>),
    Details(IndexMap<String, Value>),
}

impl Default for OnlineRepresentatives {
    fn default() -> Self {
        Self::Accounts(Vec::new())
    }
}

/// Node wide queries and commands
pub struct Node<'a> {
    client: &'a BananoClient,
}

impl<'a> Node<'a> {
    pub(crate) fn new(client: &'a BananoClient) -> Self {
        Self { client }
    }

    /// Number of accounts in the ledger
    pub async fn account_count(&self) -> anyhow::Result<u64> {
        let response = self.client.request("frontier_count", json!({})).await?;
        Ok(field::<RpcU64>(&response, "count")?.inner())
    }

    pub async fn block_count(&self) -> anyhow::Result<BlockCount> {
        let response = self.client.request("block_count", json!({})).await?;
        Ok(response.deserialize::<BlockCountDto>()?.into())
    }

    pub async fn bootstrap(&self, address: &str, port: u16) -> anyhow::Result<()> {
        let response = self
            .client
            .request(
                "bootstrap",
                json!({ "address": address, "port": port.to_string() }),
            )
            .await?;
        expect_success(&response)
    }

    pub async fn bootstrap_any(&self) -> anyhow::Result<()> {
        let response = self.client.request("bootstrap_any", json!({})).await?;
        expect_success(&response)
    }

    /// Connected peers mapped to their protocol version
    pub async fn peers(&self) -> anyhow::Result<Map<String, Value>> {
        let response = self.client.request("peers", json!({})).await?;
        collection_field(&response, "peers")
    }

    pub async fn representatives(&self, unit: Unit) -> anyhow::Result<Vec<(String, UnitAmount)>> {
        let response = self.client.request("representatives", json!({})).await?;
        let representatives: IndexMap<String, Amount> =
            collection_field(&response, "representatives")?;
        Ok(representatives
            .into_iter()
            .map(|(account, weight)| (account, unit.convert(weight)))
            .collect())
    }

    /// Accounts of the representatives which voted recently
    pub async fn representatives_online(&self) -> anyhow::Result<Vec<String>> {
        let response = self
            .client
            .request("representatives_online", json!({}))
            .await?;
        if !response.contains_key("representatives") {
            return Ok(Vec::new());
        }
        let accounts = match collection_field(&response, "representatives")? {
            OnlineRepresentatives::Accounts(accounts) => accounts,
            OnlineRepresentatives::Details(details) => details.into_keys().collect(),
        };
        Ok(accounts)
    }

    pub async fn stop(&self) -> anyhow::Result<()> {
        let response = self.client.request("stop", json!({})).await?;
        expect_success(&response)
    }

    /// Unchecked blocks mapped by hash
    pub async fn unchecked(&self, count: u64) -> anyhow::Result<Map<String, Value>> {
        let response = self
            .client
            .request(
                "unchecked",
                json!({ "count": count.to_string(), "json_block": "true" }),
            )
            .await?;
        collection_field(&response, "blocks")
    }

    pub async fn version(&self) -> anyhow::Result<VersionInfo> {
        let response = self.client.request("version", json!({})).await?;
        Ok(response.deserialize()?)
    }

    pub async fn available_supply(&self, unit: Unit) -> anyhow::Result<UnitAmount> {
        let response = self.client.request("available_supply", json!({})).await?;
        Ok(unit.convert(field(&response, "available")?))
    }

    pub async fn node_id(&self) -> anyhow::Result<String> {
        let response = self.client.request("node_id", json!({})).await?;
        field(&response, "node_id")
    }
}
