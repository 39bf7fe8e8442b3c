//! # DownstreamClient Trait
//!
//! Provides a common interface for service-specific adapters, adding a deadline-enforcing
//! `dispatch` built on top of a shared [`Transport`].
use crate::{DownstreamRequest, Transport, TransportError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Deadline applied to every downstream call unless an adapter overrides [`DownstreamClient::timeout`].
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Trait for service-specific adapters to inherit timeout-bounded dispatch.
///
/// An adapter supplies its transport and a way to turn a [`TransportError`] into its own
/// error type; `dispatch` and `dispatch_as` come for free.
///
/// # Example
///
/// ```rust
/// use relay_framework::{DownstreamClient, DownstreamRequest, Transport, TransportError};
/// use relay_framework::mock::MockTransport;
/// use async_trait::async_trait;
/// use std::sync::Arc;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("ping failed: {0}")]
/// struct PingError(#[from] TransportError);
///
/// struct PingClient {
///     transport: Arc<dyn Transport>,
/// }
///
/// #[async_trait]
/// impl DownstreamClient for PingClient {
///     type Error = PingError;
///
///     fn transport(&self) -> &dyn Transport {
///         self.transport.as_ref()
///     }
///
///     fn map_error(e: TransportError) -> Self::Error {
///         PingError(e)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mock = Arc::new(MockTransport::new());
///     mock.expect_get("/ping").return_ok(serde_json::json!({"pong": true}));
///
///     let client = PingClient { transport: mock.clone() };
///     let value = client.dispatch(DownstreamRequest::get("/ping", vec![])).await.unwrap();
///     assert_eq!(value["pong"], true);
///     mock.verify();
/// }
/// ```
#[async_trait]
pub trait DownstreamClient: Send + Sync {
    /// The adapter-specific error type.
    type Error: Send + Sync;

    /// Access the transport the adapter sends through.
    fn transport(&self) -> &dyn Transport;

    /// Deadline for a single call.
    fn timeout(&self) -> Duration {
        DEFAULT_CALL_TIMEOUT
    }

    /// Map transport errors to the adapter-specific error type.
    fn map_error(e: TransportError) -> Self::Error;

    /// Send one request and wait at most [`timeout`](Self::timeout) for the answer.
    ///
    /// A call that misses its deadline is dropped and surfaces as
    /// [`TransportError::Timeout`]. There is exactly one attempt.
    #[tracing::instrument(skip(self, request), fields(call = %request))]
    async fn dispatch(&self, request: DownstreamRequest) -> Result<Value, Self::Error> {
        tracing::debug!("Sending request");
        let limit = self.timeout();
        match tokio::time::timeout(limit, self.transport().send(request)).await {
            Ok(result) => result.map_err(Self::map_error),
            Err(_) => {
                tracing::warn!(?limit, "Call abandoned");
                Err(Self::map_error(TransportError::Timeout(limit)))
            }
        }
    }

    /// Like [`dispatch`](Self::dispatch), then decodes the answer into `T`.
    async fn dispatch_as<T>(&self, request: DownstreamRequest) -> Result<T, Self::Error>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let value = self.dispatch(request).await?;
        serde_json::from_value(value).map_err(|e| Self::map_error(e.into()))
    }
}
