//! # Relay Framework
//!
//! This crate provides the building blocks for services that fan a single inbound request
//! out into a chain of calls against other services. It does not know what those services
//! are; it only knows how to reach them, how long to wait, and how to fake them in tests.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Wire Layer** ([`Transport`]) - Moves a [`DownstreamRequest`] and returns JSON
//! 2. **Adapter Layer** ([`DownstreamClient`]) - Typed clients with a per-call deadline
//! 3. **Test Layer** ([`mock::MockTransport`]) - Deterministic stand-in for any service
//!
//! Adapters hold an `Arc<dyn Transport>`. In production that is an [`HttpTransport`]; in
//! tests it is a [`mock::MockTransport`] that records every call, which is how the service
//! crate proves that a blocked step never touches the network.
//!
//! ## Deadlines
//!
//! [`DownstreamClient::dispatch`] wraps every call in `tokio::time::timeout` with
//! [`DEFAULT_CALL_TIMEOUT`] (5 seconds). A call that misses it is dropped and reported as
//! [`TransportError::Timeout`]. Nothing in the framework retries.
//!
//! ## Errors
//!
//! [`TransportError`] is the only error the framework produces. Each adapter maps it into
//! its own `thiserror` enum via [`DownstreamClient::map_error`], so callers can keep
//! transport failures apart from negative answers.

pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;
pub mod transport;

// Re-export core types for convenience
pub use client_trait::{DownstreamClient, DEFAULT_CALL_TIMEOUT};
pub use error::TransportError;
pub use message::DownstreamRequest;
pub use transport::{HttpTransport, Transport};
