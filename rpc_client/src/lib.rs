mod account;
mod block;
mod client;
mod config;
mod dtos;
mod error;
mod gateway;
mod key;
mod node;
mod parse;
mod request;
mod response;
mod toml;
mod unit;
mod wallet;
mod wallet_account;

pub use account::*;
pub use block::*;
pub use client::BananoClient;
pub use config::*;
pub use dtos::*;
pub use error::RpcError;
pub use gateway::RpcGateway;
pub use key::*;
pub use node::*;
pub use request::*;
pub use response::RpcResponse;
pub use self::toml::RpcClientToml;
pub use unit::*;
pub use wallet::*;
pub use wallet_account::WalletAccount;

pub use banano_core::{to_display, to_native, Amount, Decimal};
pub use reqwest::Url;
