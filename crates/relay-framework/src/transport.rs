//! # Transports
//!
//! A [`Transport`] moves a [`DownstreamRequest`] to a downstream service and hands back the
//! decoded JSON answer. Adapters never talk to the network directly; they hold an
//! `Arc<dyn Transport>`, so tests can swap in a [`MockTransport`](crate::mock::MockTransport).

use crate::error::TransportError;
use crate::message::DownstreamRequest;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// The seam between adapters and the wire.
///
/// Implementations perform exactly one attempt per call. Deadlines are not the
/// transport's concern: they are applied by [`DownstreamClient::dispatch`](crate::DownstreamClient::dispatch).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: DownstreamRequest) -> Result<Value, TransportError>;
}

/// A [`Transport`] that issues real HTTP calls against a base URL.
///
/// Cheap to clone: the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::Connection(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: DownstreamRequest) -> Result<Value, TransportError> {
        let url = self.url(request.path());
        debug!(%request, %url, "Sending request");

        let builder = match &request {
            DownstreamRequest::Get { query, .. } => self.client.get(&url).query(query),
            DownstreamRequest::Post { body, .. } => self.client.post(&url).json(body),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                path: request.path().to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
