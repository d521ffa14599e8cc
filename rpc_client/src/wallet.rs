use crate::{
    account::{AccountBalanceDto, PendingBlocksDto},
    parse::{collection_field, expect_success, field},
    AccountBalance, BananoClient, PendingBlock, RpcBool, RpcU64, Unit, UnitAmount,
    WalletAccount,
};
use banano_core::Amount;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::json;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletInfo {
    pub balance: UnitAmount,
    pub pending: UnitAmount,
    pub accounts_count: u64,
    pub adhoc_count: u64,
    pub deterministic_count: u64,
    pub deterministic_index: u64,
}

#[derive(Deserialize)]
struct WalletInfoDto {
    balance: Amount,
    pending: Option<Amount>,
    receivable: Option<Amount>,
    accounts_count: RpcU64,
    adhoc_count: RpcU64,
    deterministic_count: RpcU64,
    deterministic_index: RpcU64,
}

impl WalletInfoDto {
    fn into_info(self, unit: Unit) -> anyhow::Result<WalletInfo> {
        let pending = self
            .pending
            .or(self.receivable)
            .ok_or_else(|| anyhow::anyhow!("pending amount is missing"))?;
        Ok(WalletInfo {
            balance: unit.convert(self.balance),
            pending: unit.convert(pending),
            accounts_count: self.accounts_count.inner(),
            adhoc_count: self.adhoc_count.inner(),
            deterministic_count: self.deterministic_count.inner(),
            deterministic_index: self.deterministic_index.inner(),
        })
    }
}

/// A wallet stored on the node
pub struct Wallet<'a> {
    client: &'a BananoClient,
    id: String,
}

impl<'a> Wallet<'a> {
    pub(crate) fn new(client: &'a BananoClient, id: String) -> Self {
        Self { client, id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn account(&self, address: impl Into<String>) -> WalletAccount<'a> {
        WalletAccount::new(self.client, self.id.clone(), address.into())
    }

    /// Adds the next deterministic account to the wallet
    pub async fn create_account(&self) -> anyhow::Result<WalletAccount<'a>> {
        let response = self
            .client
            .request("account_create", json!({ "wallet": self.id }))
            .await?;
        Ok(self.account(field::<String>(&response, "account")?))
    }

    pub async fn create_accounts(&self, count: u64) -> anyhow::Result<Vec<WalletAccount<'a>>> {
        let response = self
            .client
            .request(
                "accounts_create",
                json!({ "wallet": self.id, "count": count.to_string() }),
            )
            .await?;
        let accounts: Vec<String> = collection_field(&response, "accounts")?;
        Ok(accounts
            .into_iter()
            .map(|address| self.account(address))
            .collect())
    }

    pub async fn destroy(&self) -> anyhow::Result<bool> {
        let response = self
            .client
            .request("wallet_destroy", json!({ "wallet": self.id }))
            .await?;
        Ok(field::<RpcBool>(&response, "destroyed")?.inner())
    }

    /// The wallet as json document
    pub async fn export(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .request("wallet_export", json!({ "wallet": self.id }))
            .await?;
        field(&response, "json")
    }

    pub async fn accounts(&self) -> anyhow::Result<Vec<String>> {
        let response = self
            .client
            .request("account_list", json!({ "wallet": self.id }))
            .await?;
        collection_field(&response, "accounts")
    }

    pub async fn contains(&self, account: &str) -> anyhow::Result<bool> {
        let response = self
            .client
            .request(
                "wallet_contains",
                json!({ "wallet": self.id, "account": account }),
            )
            .await?;
        Ok(field::<RpcBool>(&response, "exists")?.inner())
    }

    /// Balance of every account in the wallet
    pub async fn balance(&self, unit: Unit) -> anyhow::Result<Vec<(String, AccountBalance)>> {
        let response = self
            .client
            .request("wallet_balances", json!({ "wallet": self.id }))
            .await?;
        let balances: IndexMap<String, AccountBalanceDto> =
            collection_field(&response, "balances")?;
        balances
            .into_iter()
            .map(|(account, balance)| {
                Ok::<_, anyhow::Error>((account, balance.into_balance(unit)?))
            })
            .collect()
    }

    /// Adds an adhoc private key, returns its account
    pub async fn add_key(&self, private_key: &str, generate_work: bool) -> anyhow::Result<String> {
        let response = self
            .client
            .request(
                "wallet_add",
                json!({
                    "wallet": self.id,
                    "key": private_key,
                    "work": generate_work.to_string()
                }),
            )
            .await?;
        field(&response, "account")
    }

    pub async fn change_seed(&self, seed: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .request(
                "wallet_change_seed",
                json!({ "wallet": self.id, "seed": seed }),
            )
            .await?;
        expect_success(&response)
    }

    pub async fn change_password(&self, password: &str) -> anyhow::Result<bool> {
        let response = self
            .client
            .request(
                "password_change",
                json!({ "wallet": self.id, "password": password }),
            )
            .await?;
        Ok(field::<RpcBool>(&response, "changed")?.inner())
    }

    /// Unlocks the wallet. Returns false if the password is wrong.
    pub async fn enter_password(&self, password: &str) -> anyhow::Result<bool> {
        let response = self
            .client
            .request(
                "password_enter",
                json!({ "wallet": self.id, "password": password }),
            )
            .await?;
        Ok(field::<RpcBool>(&response, "valid")?.inner())
    }

    pub async fn locked(&self) -> anyhow::Result<bool> {
        let response = self
            .client
            .request("wallet_locked", json!({ "wallet": self.id }))
            .await?;
        Ok(field::<RpcBool>(&response, "locked")?.inner())
    }

    pub async fn lock(&self) -> anyhow::Result<bool> {
        let response = self
            .client
            .request("wallet_lock", json!({ "wallet": self.id }))
            .await?;
        Ok(field::<RpcBool>(&response, "locked")?.inner())
    }

    /// Receivable blocks per wallet account
    pub async fn pending(
        &self,
        count: u64,
        unit: Unit,
    ) -> anyhow::Result<Vec<(String, Vec<PendingBlock>)>> {
        let response = self
            .client
            .request(
                "wallet_pending",
                json!({ "wallet": self.id, "count": count.to_string(), "source": "true" }),
            )
            .await?;
        let blocks: IndexMap<String, PendingBlocksDto> = collection_field(&response, "blocks")?;
        Ok(blocks
            .into_iter()
            .map(|(account, blocks)| (account, blocks.into_blocks(unit)))
            .collect())
    }

    /// Rebroadcasts the last `count` blocks of every account
    pub async fn republish(&self, count: u64) -> anyhow::Result<Vec<String>> {
        let response = self
            .client
            .request(
                "wallet_republish",
                json!({ "wallet": self.id, "count": count.to_string() }),
            )
            .await?;
        collection_field(&response, "blocks")
    }

    /// Cached work per account
    pub async fn work(&self) -> anyhow::Result<Vec<(String, String)>> {
        let response = self
            .client
            .request("wallet_work_get", json!({ "wallet": self.id }))
            .await?;
        let works: IndexMap<String, String> = collection_field(&response, "works")?;
        Ok(works.into_iter().collect())
    }

    /// Latest block hash per account
    pub async fn frontiers(&self) -> anyhow::Result<Vec<(String, String)>> {
        let response = self
            .client
            .request("wallet_frontiers", json!({ "wallet": self.id }))
            .await?;
        let frontiers: IndexMap<String, String> = collection_field(&response, "frontiers")?;
        Ok(frontiers.into_iter().collect())
    }

    /// Default representative for new accounts
    pub async fn representative(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .request("wallet_representative", json!({ "wallet": self.id }))
            .await?;
        field(&response, "representative")
    }

    pub async fn change_representative(
        &self,
        representative: &str,
        update_existing_accounts: bool,
    ) -> anyhow::Result<bool> {
        let response = self
            .client
            .request(
                "wallet_representative_set",
                json!({
                    "wallet": self.id,
                    "representative": representative,
                    "update_existing_accounts": update_existing_accounts.to_string()
                }),
            )
            .await?;
        Ok(field::<RpcBool>(&response, "set")?.inner())
    }

    pub async fn info(&self, unit: Unit) -> anyhow::Result<WalletInfo> {
        let response = self
            .client
            .request("wallet_info", json!({ "wallet": self.id }))
            .await?;
        response.deserialize::<WalletInfoDto>()?.into_info(unit)
    }

    /// Whether the wallet exists on the node at all
    pub async fn exists(&self) -> anyhow::Result<bool> {
        let response = self
            .client
            .request_unchecked("wallet_locked", json!({ "wallet": self.id }))
            .await?;
        Ok(!response.is_error() && response.contains_key("locked"))
    }
}
