use crate::{
    parse::{collection_field, expect_success, field},
    BananoClient, RpcBool, RpcU64, Unit, UnitAmount,
};
use banano_core::Amount;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockInfo {
    pub block_account: String,
    pub amount: UnitAmount,
    pub balance: UnitAmount,
    pub height: u64,
    pub local_timestamp: u64,
    pub confirmed: bool,
    pub subtype: Option<String>,
    /// The block itself as json
    pub contents: Value,
}

#[derive(Deserialize)]
struct BlockInfoDto {
    block_account: String,
    amount: Amount,
    balance: Amount,
    height: RpcU64,
    local_timestamp: RpcU64,
    confirmed: Option<RpcBool>,
    subtype: Option<String>,
    contents: Value,
}

impl BlockInfoDto {
    fn into_info(self, unit: Unit) -> BlockInfo {
        BlockInfo {
            block_account: self.block_account,
            amount: unit.convert(self.amount),
            balance: unit.convert(self.balance),
            height: self.height.inner(),
            local_timestamp: self.local_timestamp.inner(),
            confirmed: self.confirmed.is_some_and(|c| c.inner()),
            subtype: self.subtype,
            contents: self.contents,
        }
    }
}

/// Older nodes only answer "valid"
#[derive(Deserialize)]
struct WorkValidateDto {
    valid_all: Option<RpcBool>,
    valid: Option<RpcBool>,
}

/// A block identified by its hash
pub struct Block<'a> {
    client: &'a BananoClient,
    hash: String,
}

impl<'a> Block<'a> {
    pub(crate) fn new(client: &'a BananoClient, hash: String) -> Self {
        Self { client, hash }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Account that owns the block
    pub async fn account(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .request("block_account", json!({ "hash": self.hash }))
            .await?;
        field(&response, "account")
    }

    pub async fn info(&self, unit: Unit) -> anyhow::Result<BlockInfo> {
        let response = self
            .client
            .request(
                "block_info",
                json!({ "hash": self.hash, "json_block": "true" }),
            )
            .await?;
        Ok(response.deserialize::<BlockInfoDto>()?.into_info(unit))
    }

    /// Hashes of this block and up to `count - 1` predecessors, newest first
    pub async fn chain(&self, count: u64) -> anyhow::Result<Vec<String>> {
        let response = self
            .client
            .request(
                "chain",
                json!({ "block": self.hash, "count": count.to_string() }),
            )
            .await?;
        collection_field(&response, "blocks")
    }

    /// Hashes of this block and up to `count - 1` successors, oldest first
    pub async fn successors(&self, count: u64) -> anyhow::Result<Vec<String>> {
        let response = self
            .client
            .request(
                "successors",
                json!({ "block": self.hash, "count": count.to_string() }),
            )
            .await?;
        collection_field(&response, "blocks")
    }

    /// Rebroadcasts the block, returns the hashes that were published
    pub async fn republish(&self) -> anyhow::Result<Vec<String>> {
        let response = self
            .client
            .request("republish", json!({ "hash": self.hash }))
            .await?;
        collection_field(&response, "blocks")
    }

    /// Starts an election for the block
    pub async fn confirm(&self) -> anyhow::Result<bool> {
        let response = self
            .client
            .request("block_confirm", json!({ "hash": self.hash }))
            .await?;
        Ok(field::<RpcBool>(&response, "started")?.inner())
    }

    pub async fn pending_exists(&self) -> anyhow::Result<bool> {
        let response = self
            .client
            .request("pending_exists", json!({ "hash": self.hash }))
            .await?;
        Ok(field::<RpcBool>(&response, "exists")?.inner())
    }

    pub async fn generate_work(&self, use_peers: bool) -> anyhow::Result<String> {
        let response = self
            .client
            .request(
                "work_generate",
                json!({ "hash": self.hash, "use_peers": use_peers.to_string() }),
            )
            .await?;
        field(&response, "work")
    }

    pub async fn cancel_work(&self) -> anyhow::Result<()> {
        let response = self
            .client
            .request("work_cancel", json!({ "hash": self.hash }))
            .await?;
        expect_success(&response)
    }

    pub async fn is_valid_work(&self, work: &str) -> anyhow::Result<bool> {
        let response = self
            .client
            .request("work_validate", json!({ "hash": self.hash, "work": work }))
            .await?;
        let validation = response.deserialize::<WorkValidateDto>()?;
        validation
            .valid_all
            .or(validation.valid)
            .map(|valid| valid.inner())
            .ok_or_else(|| anyhow::anyhow!("node response has no field \"valid\""))
    }
}
