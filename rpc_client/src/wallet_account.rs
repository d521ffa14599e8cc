use crate::{
    parse::{expect_success, field},
    Account, AccountBalance, BananoClient, RpcBool, Unit, UnitAmount,
};
use serde_json::json;
use tracing::debug;

/// An account whose private key is held by a node wallet. Everything that
/// needs to sign goes through here.
pub struct WalletAccount<'a> {
    client: &'a BananoClient,
    wallet: String,
    address: String,
}

impl<'a> WalletAccount<'a> {
    pub(crate) fn new(client: &'a BananoClient, wallet: String, address: String) -> Self {
        Self {
            client,
            wallet,
            address,
        }
    }

    pub fn wallet(&self) -> &str {
        &self.wallet
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Read only view of the same account
    pub fn ledger(&self) -> Account<'a> {
        Account::new(self.client, self.address.clone())
    }

    pub async fn balance(&self, unit: Unit) -> anyhow::Result<AccountBalance> {
        self.ledger().balance(unit).await
    }

    /// Sends `amount` to `destination` and returns the hash of the send block.
    /// Passing the same `id` again makes the node return the earlier block
    /// instead of sending twice.
    pub async fn send(
        &self,
        destination: &str,
        amount: impl Into<UnitAmount>,
        id: Option<&str>,
    ) -> anyhow::Result<String> {
        let amount = amount.into();
        let raw = amount.to_raw()?;
        debug!(source = %self.address, destination, %amount, "send");

        let mut args = json!({
            "wallet": self.wallet,
            "source": self.address,
            "destination": destination,
            "amount": raw.to_string_dec()
        });
        if let Some(id) = id {
            args["id"] = json!(id);
        }
        let response = self.client.request("send", args).await?;
        field(&response, "block")
    }

    /// Receives a pending block, returns the hash of the receive block
    pub async fn receive(&self, block: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .request(
                "receive",
                json!({
                    "wallet": self.wallet,
                    "account": self.address,
                    "block": block
                }),
            )
            .await?;
        field(&response, "block")
    }

    pub async fn change_representative(&self, representative: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .request(
                "account_representative_set",
                json!({
                    "wallet": self.wallet,
                    "account": self.address,
                    "representative": representative
                }),
            )
            .await?;
        field(&response, "block")
    }

    /// Removes the account from the wallet
    pub async fn remove(&self) -> anyhow::Result<bool> {
        let response = self
            .client
            .request(
                "account_remove",
                json!({ "wallet": self.wallet, "account": self.address }),
            )
            .await?;
        Ok(field::<RpcBool>(&response, "removed")?.inner())
    }

    pub async fn work(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .request(
                "work_get",
                json!({ "wallet": self.wallet, "account": self.address }),
            )
            .await?;
        field(&response, "work")
    }

    pub async fn set_work(&self, work: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .request(
                "work_set",
                json!({
                    "wallet": self.wallet,
                    "account": self.address,
                    "work": work
                }),
            )
            .await?;
        expect_success(&response)
    }
}
