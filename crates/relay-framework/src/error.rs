//! # Transport Errors
//!
//! This module defines the error type shared by every downstream call. Adapters wrap it
//! in their own error enums, so a caller can always tell a transport failure apart from
//! a well-formed negative answer.

use std::time::Duration;

/// Errors that can occur while talking to a downstream service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Unexpected status {status} from {path}")]
    Status { status: u16, path: String },
    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// Returns `true` if the call was abandoned because it exceeded its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Decode(e.to_string())
    }
}
