use thiserror::Error;

/// Failures of a single gateway call. An `error` field sent by the node is
/// not one of them; it arrives as a normal [`crate::RpcResponse`].
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("could not connect to node: {0}")]
    ConnectionFailure(#[source] reqwest::Error),

    #[error("request to node timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("node answered with http status {0}")]
    Status(u16),

    #[error("could not decode node response: {0}")]
    DecodeFailure(String),

    #[error("node response is nested deeper than {0} levels")]
    TooDeep(u8),

    #[error("could not create http client: {0}")]
    Client(#[source] reqwest::Error),
}

impl RpcError {
    /// The request did not complete at the http level
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RpcError::ConnectionFailure(_) | RpcError::Timeout(_) | RpcError::Status(_)
        )
    }

    /// The node answered, but not with a usable json document
    pub fn is_decode(&self) -> bool {
        matches!(self, RpcError::DecodeFailure(_) | RpcError::TooDeep(_))
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RpcError::Timeout(e)
        } else if let Some(status) = e.status() {
            RpcError::Status(status.as_u16())
        } else if e.is_decode() {
            RpcError::DecodeFailure(e.to_string())
        } else if e.is_builder() {
            RpcError::Client(e)
        } else {
            RpcError::ConnectionFailure(e)
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(e: serde_json::Error) -> Self {
        RpcError::DecodeFailure(e.to_string())
    }
}
