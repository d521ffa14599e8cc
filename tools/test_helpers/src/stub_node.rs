use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{net::TcpListener, task::JoinHandle};
use tracing::debug;

/// What the stub node answers to a single request
#[derive(Clone, Debug)]
pub struct StubReply {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubReply {
    pub fn json(value: Value) -> Self {
        Self::text(value.to_string())
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: None,
        }
    }

    pub fn node_error(message: &str) -> Self {
        Self::json(serde_json::json!({ "error": message }))
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request as received by the stub node
#[derive(Clone, Debug)]
pub struct ReceivedRequest {
    pub body: Value,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
}

impl ReceivedRequest {
    pub fn action(&self) -> Option<&str> {
        self.body.get("action").and_then(Value::as_str)
    }
}

type Responder = dyn Fn(&Value) -> StubReply + Send + Sync;

struct StubState {
    responder: Box<Responder>,
    received: Mutex<Vec<ReceivedRequest>>,
}

/// A fake node RPC endpoint listening on a random local port.
/// The server task is aborted when the stub is dropped.
pub struct StubNode {
    addr: SocketAddr,
    state: Arc<StubState>,
    server: JoinHandle<()>,
}

impl StubNode {
    pub async fn start<F>(responder: F) -> anyhow::Result<Self>
    where
        F: Fn(&Value) -> StubReply + Send + Sync + 'static,
    {
        let state = Arc::new(StubState {
            responder: Box::new(responder),
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/", post(handle_rpc))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                debug!("stub node stopped: {:?}", e);
            }
        });

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    /// Answers every request with the same reply
    pub async fn replying(reply: StubReply) -> anyhow::Result<Self> {
        Self::start(move |_| reply.clone()).await
    }

    /// Answers by action name. Unknown actions get the node's "Unknown command" error.
    pub async fn with_actions(
        actions: impl IntoIterator<Item = (&'static str, Value)>,
    ) -> anyhow::Result<Self> {
        let actions: HashMap<&'static str, Value> = actions.into_iter().collect();
        Self::start(move |request| {
            let action = request.get("action").and_then(Value::as_str).unwrap_or("");
            match actions.get(action) {
                Some(reply) => StubReply::json(reply.clone()),
                None => StubReply::node_error("Unknown command"),
            }
        })
        .await
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state
            .received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<ReceivedRequest> {
        self.received().pop()
    }
}

impl Drop for StubNode {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle_rpc(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::String(body));
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    let request = ReceivedRequest {
        content_type: header_str(header::CONTENT_TYPE),
        user_agent: header_str(header::USER_AGENT),
        body,
    };
    let reply = (state.responder)(&request.body);
    if let Ok(mut received) = state.received.lock() {
        received.push(request);
    }

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}
