use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:7072";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcClientConfig {
    pub endpoint: Url,
    /// Upper bound for the whole request, from connecting until the body is read
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Responses nested deeper than this are rejected
    pub max_json_depth: u8,
    pub user_agent: String,
}

impl RpcClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            ..Default::default()
        }
    }

    pub fn default_endpoint() -> Url {
        // The literal is a valid url
        Url::parse(DEFAULT_ENDPOINT).unwrap()
    }

    pub fn default_user_agent() -> String {
        format!("banano-rpc-client/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            max_json_depth: 20,
            user_agent: Self::default_user_agent(),
        }
    }
}
