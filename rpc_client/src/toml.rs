use crate::RpcClientConfig;
use anyhow::Context;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// File representation of [`RpcClientConfig`]. Missing values fall back to the defaults.
/// Timeouts are given in seconds.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct RpcClientToml {
    pub endpoint: Option<String>,
    pub timeout: Option<u64>,
    pub connect_timeout: Option<u64>,
    pub max_json_depth: Option<u8>,
    pub user_agent: Option<String>,
}

impl RpcClientToml {
    pub fn parse(toml_str: &str) -> anyhow::Result<RpcClientConfig> {
        let toml: RpcClientToml =
            toml::from_str(toml_str).context("invalid rpc client configuration")?;
        (&toml).try_into()
    }
}

impl Default for RpcClientToml {
    fn default() -> Self {
        let config = RpcClientConfig::default();
        (&config).into()
    }
}

impl From<&RpcClientConfig> for RpcClientToml {
    fn from(config: &RpcClientConfig) -> Self {
        Self {
            endpoint: Some(config.endpoint.to_string()),
            timeout: Some(config.timeout.as_secs()),
            connect_timeout: Some(config.connect_timeout.as_secs()),
            max_json_depth: Some(config.max_json_depth),
            user_agent: Some(config.user_agent.clone()),
        }
    }
}

impl TryFrom<&RpcClientToml> for RpcClientConfig {
    type Error = anyhow::Error;

    fn try_from(toml: &RpcClientToml) -> Result<Self, Self::Error> {
        let mut config = RpcClientConfig::default();
        if let Some(endpoint) = &toml.endpoint {
            config.endpoint = Url::parse(endpoint)
                .with_context(|| format!("invalid rpc endpoint: {}", endpoint))?;
        }
        if let Some(timeout) = toml.timeout {
            config.timeout = Duration::from_secs(timeout);
        }
        if let Some(connect_timeout) = toml.connect_timeout {
            config.connect_timeout = Duration::from_secs(connect_timeout);
        }
        if let Some(max_json_depth) = toml.max_json_depth {
            config.max_json_depth = max_json_depth;
        }
        if let Some(user_agent) = &toml.user_agent {
            config.user_agent = user_agent.clone();
        }
        Ok(config)
    }
}
