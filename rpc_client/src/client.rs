use crate::{
    params, Account, Block, Key, Node, RpcClientConfig, RpcGateway, RpcResponse, Wallet,
    WalletAccount,
};
use anyhow::anyhow;
use serde_json::Value;

/// Entry point of the SDK. Hands out views for nodes, accounts, blocks,
/// keys and wallets which all send their requests through one gateway.
pub struct BananoClient {
    gateway: RpcGateway,
}

impl BananoClient {
    pub fn new(config: RpcClientConfig) -> anyhow::Result<Self> {
        Ok(Self::from_gateway(RpcGateway::new(config)?))
    }

    pub fn from_gateway(gateway: RpcGateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &RpcGateway {
        &self.gateway
    }

    pub fn node(&self) -> Node<'_> {
        Node::new(self)
    }

    pub fn key(&self) -> Key<'_> {
        Key::new(self)
    }

    pub fn account(&self, address: impl Into<String>) -> Account<'_> {
        Account::new(self, address.into())
    }

    pub fn block(&self, hash: impl Into<String>) -> Block<'_> {
        Block::new(self, hash.into())
    }

    pub fn wallet(&self, id: impl Into<String>) -> Wallet<'_> {
        Wallet::new(self, id.into())
    }

    pub fn wallet_account(
        &self,
        wallet: impl Into<String>,
        account: impl Into<String>,
    ) -> WalletAccount<'_> {
        WalletAccount::new(self, wallet.into(), account.into())
    }

    /// Creates a new wallet on the node, optionally restoring it from a seed
    pub async fn create_wallet(&self, seed: Option<&str>) -> anyhow::Result<Wallet<'_>> {
        let args = match seed {
            Some(seed) => serde_json::json!({ "seed": seed }),
            None => serde_json::json!({}),
        };
        let response = self.request("wallet_create", args).await?;
        let id = crate::parse::field::<String>(&response, "wallet")?;
        Ok(self.wallet(id))
    }

    /// Calls `action` and turns an `error` reported by the node into an error
    pub(crate) async fn request(
        &self,
        action: &'static str,
        args: Value,
    ) -> anyhow::Result<RpcResponse> {
        let response = self.request_unchecked(action, args).await?;
        if let Some(error) = response.error() {
            return Err(anyhow!("node returned error: \"{}\"", error));
        }
        Ok(response)
    }

    pub(crate) async fn request_unchecked(
        &self,
        action: &'static str,
        args: Value,
    ) -> anyhow::Result<RpcResponse> {
        Ok(self.gateway.call(action, params(args)).await?)
    }
}
