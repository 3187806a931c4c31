use crate::error::{GatewayError, GatewayResult};
use crate::types::GatewayResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Content type the gateway expects on every call, body or not.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Fully resolved outbound call as handed to the transport. The dispatcher
/// owns URL and header decisions; the transport only moves bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: reqwest::Method,
    pub url: String,
    pub bearer_token: String,
    /// Pre-encoded `x-www-form-urlencoded` body, present on POST only.
    pub form_body: Option<String>,
}

/// Injected HTTP capability. Implementations perform one attempt per call;
/// retries, timeouts, and cancellation belong to the implementation's own
/// primitives, never to the dispatcher.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> GatewayResult<GatewayResponse>;
}

/// Production transport over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport {
                message: format!("failed to initialize HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> GatewayResult<GatewayResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .bearer_auth(&request.bearer_token);
        if let Some(body) = request.form_body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(method = %request.method, url = %request.url, "gateway request failed: {}", e);
            GatewayError::Transport {
                message: format!("gateway request failed: {}", e),
            }
        })?;

        // The gateway reports its own failures as JSON bodies with non-2xx
        // statuses; those decode fine and are returned verbatim. Only an
        // undecodable body is a transport fault.
        let status = response.status();
        let text = response.text().await.map_err(|e| GatewayError::Transport {
            message: format!("failed to read gateway response: {}", e),
        })?;
        serde_json::from_str(&text).map_err(|e| {
            warn!(%status, url = %request.url, "gateway returned non-JSON body");
            GatewayError::Transport {
                message: format!("invalid gateway JSON response (HTTP {}): {}", status, e),
            }
        })
    }
}
