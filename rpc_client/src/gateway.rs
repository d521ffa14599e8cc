use crate::{Action, RpcClientConfig, RpcError, RpcRequest, RpcResponse};
use banano_output_tracker::{OutputListener, OutputTracker};
use reqwest::{Client, ClientBuilder};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// The only place where the SDK talks to the node. Each call is a single
/// json POST to the configured endpoint; nothing is retried or cached.
pub struct RpcGateway {
    config: RpcClientConfig,
    client: Client,
    request_listener: OutputListener<RpcRequest>,
}

impl RpcGateway {
    pub fn new(config: RpcClientConfig) -> Result<Self, RpcError> {
        let client = ClientBuilder::new()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(RpcError::Client)?;

        Ok(Self {
            config,
            client,
            request_listener: OutputListener::new(),
        })
    }

    pub fn config(&self) -> &RpcClientConfig {
        &self.config
    }

    /// Records every request passed to the node from now on
    pub fn track_requests(&self) -> Arc<OutputTracker<RpcRequest>> {
        self.request_listener.track()
    }

    pub async fn call(
        &self,
        action: impl Into<Action>,
        params: Map<String, Value>,
    ) -> Result<RpcResponse, RpcError> {
        self.send(RpcRequest::new(action, params)).await
    }

    pub async fn send(&self, request: RpcRequest) -> Result<RpcResponse, RpcError> {
        self.request_listener.emit(request.clone());
        debug!(action = %request.action(), endpoint = %self.config.endpoint, "rpc request");

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(action = %request.action(), "rpc request failed: {}", e);
                RpcError::from(e)
            })?;

        let status = response.status();
        debug!(action = %request.action(), status = status.as_u16(), "rpc response");
        if !status.is_success() {
            return Err(RpcError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        trace!(body = %String::from_utf8_lossy(&body), "rpc response body");
        RpcResponse::decode(&body, self.config.max_json_depth)
    }
}
