use crate::{
    parse::{collection_field, field},
    BananoClient, RpcU64, Unit, UnitAmount,
};
use banano_core::Amount;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountBalance {
    pub balance: UnitAmount,
    pub pending: UnitAmount,
}

/// Newer nodes call the pending amount "receivable", some send both
#[derive(Deserialize)]
pub(crate) struct AccountBalanceDto {
    balance: Amount,
    pending: Option<Amount>,
    receivable: Option<Amount>,
}

impl AccountBalanceDto {
    pub(crate) fn into_balance(self, unit: Unit) -> anyhow::Result<AccountBalance> {
        let pending = self
            .pending
            .or(self.receivable)
            .ok_or_else(|| anyhow::anyhow!("pending amount is missing"))?;
        Ok(AccountBalance {
            balance: unit.convert(self.balance),
            pending: unit.convert(pending),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: String,
    pub account: String,
    pub amount: UnitAmount,
    pub hash: String,
    pub height: Option<u64>,
    pub local_timestamp: Option<u64>,
}

#[derive(Deserialize)]
struct HistoryEntryDto {
    #[serde(rename = "type")]
    kind: String,
    account: String,
    amount: Amount,
    hash: String,
    height: Option<RpcU64>,
    local_timestamp: Option<RpcU64>,
}

impl HistoryEntryDto {
    fn into_entry(self, unit: Unit) -> HistoryEntry {
        HistoryEntry {
            kind: self.kind,
            account: self.account,
            amount: unit.convert(self.amount),
            hash: self.hash,
            height: self.height.map(|h| h.inner()),
            local_timestamp: self.local_timestamp.map(|t| t.inner()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountInfo {
    pub frontier: String,
    pub open_block: String,
    pub representative_block: String,
    pub balance: UnitAmount,
    pub modified_timestamp: u64,
    pub block_count: u64,
    pub representative: Option<String>,
    pub weight: Option<UnitAmount>,
    pub pending: Option<UnitAmount>,
}

#[derive(Deserialize)]
struct AccountInfoDto {
    frontier: String,
    open_block: String,
    representative_block: String,
    balance: Amount,
    modified_timestamp: RpcU64,
    block_count: RpcU64,
    representative: Option<String>,
    weight: Option<Amount>,
    pending: Option<Amount>,
    receivable: Option<Amount>,
}

impl AccountInfoDto {
    fn into_info(self, unit: Unit) -> AccountInfo {
        AccountInfo {
            frontier: self.frontier,
            open_block: self.open_block,
            representative_block: self.representative_block,
            balance: unit.convert(self.balance),
            modified_timestamp: self.modified_timestamp.inner(),
            block_count: self.block_count.inner(),
            representative: self.representative,
            weight: self.weight.map(|w| unit.convert(w)),
            pending: self.pending.or(self.receivable).map(|p| unit.convert(p)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingBlock {
    pub hash: String,
    pub amount: Option<UnitAmount>,
    pub source: Option<String>,
}

/// The node lists plain hashes, or maps each hash to its details (or just its amount)
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum PendingBlocksDto {
    Hashes(Vec<String>),
    Details(IndexMap<String, PendingDetailsDto>),
}

impl Default for PendingBlocksDto {
    fn default() -> Self {
        Self::Hashes(Vec::new())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum PendingDetailsDto {
    Details {
        amount: Amount,
        #[serde(default)]
        source: Option<String>,
    },
    Amount(Amount),
}

impl PendingBlocksDto {
    pub(crate) fn into_blocks(self, unit: Unit) -> Vec<PendingBlock> {
        match self {
            Self::Hashes(hashes) => hashes
                .into_iter()
                .map(|hash| PendingBlock {
                    hash,
                    amount: None,
                    source: None,
                })
                .collect(),
            Self::Details(details) => details
                .into_iter()
                .map(|(hash, details)| {
                    let (amount, source) = match details {
                        PendingDetailsDto::Details { amount, source } => (amount, source),
                        PendingDetailsDto::Amount(amount) => (amount, None),
                    };
                    PendingBlock {
                        hash,
                        amount: Some(unit.convert(amount)),
                        source,
                    }
                })
                .collect(),
        }
    }
}

/// Read only view of any account in the ledger
pub struct Account<'a> {
    client: &'a BananoClient,
    address: String,
}

impl<'a> Account<'a> {
    pub(crate) fn new(client: &'a BananoClient, address: String) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub async fn balance(&self, unit: Unit) -> anyhow::Result<AccountBalance> {
        let response = self
            .client
            .request("account_balance", json!({ "account": self.address }))
            .await?;
        response
            .deserialize::<AccountBalanceDto>()?
            .into_balance(unit)
    }

    pub async fn block_count(&self) -> anyhow::Result<u64> {
        let response = self
            .client
            .request("account_block_count", json!({ "account": self.address }))
            .await?;
        Ok(field::<RpcU64>(&response, "block_count")?.inner())
    }

    pub async fn history(&self, count: u64, unit: Unit) -> anyhow::Result<Vec<HistoryEntry>> {
        let response = self
            .client
            .request(
                "account_history",
                json!({ "account": self.address, "count": count.to_string() }),
            )
            .await?;
        let history: Vec<HistoryEntryDto> = collection_field(&response, "history")?;
        Ok(history
            .into_iter()
            .map(|entry| entry.into_entry(unit))
            .collect())
    }

    pub async fn info(&self, unit: Unit) -> anyhow::Result<AccountInfo> {
        let response = self
            .client
            .request(
                "account_info",
                json!({
                    "account": self.address,
                    "representative": "true",
                    "weight": "true",
                    "pending": "true"
                }),
            )
            .await?;
        Ok(response.deserialize::<AccountInfoDto>()?.into_info(unit))
    }

    /// Public key of the account as hex
    pub async fn public_key(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .request("account_key", json!({ "account": self.address }))
            .await?;
        field(&response, "key")
    }

    pub async fn representative(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .request("account_representative", json!({ "account": self.address }))
            .await?;
        field(&response, "representative")
    }

    /// Voting weight delegated to this account
    pub async fn weight(&self, unit: Unit) -> anyhow::Result<UnitAmount> {
        let response = self
            .client
            .request("account_weight", json!({ "account": self.address }))
            .await?;
        Ok(unit.convert(field(&response, "weight")?))
    }

    /// Blocks sent to this account which were not received yet
    pub async fn pending(
        &self,
        count: u64,
        threshold: Option<UnitAmount>,
        unit: Unit,
    ) -> anyhow::Result<Vec<PendingBlock>> {
        let mut args = json!({
            "account": self.address,
            "count": count.to_string(),
            "source": "true"
        });
        if let Some(threshold) = threshold {
            args["threshold"] = Value::String(threshold.to_raw()?.to_string_dec());
        }
        let response = self.client.request("pending", args).await?;
        let blocks: PendingBlocksDto = collection_field(&response, "blocks")?;
        Ok(blocks.into_blocks(unit))
    }

    /// Whether the account has been opened. Any node error counts as "no".
    pub async fn exists(&self) -> anyhow::Result<bool> {
        let response = self
            .client
            .request_unchecked("account_info", json!({ "account": self.address }))
            .await?;
        Ok(!response.is_error() && response.contains_key("open_block"))
    }
}
