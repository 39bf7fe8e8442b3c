//! # Mock Transport & Testing Guide
//!
//! [`MockTransport`] implements the same [`Transport`] trait as
//! [`HttpTransport`](crate::HttpTransport) but answers from an in-memory queue of
//! expectations. Every request it receives is recorded, so a test can assert both on what
//! an adapter sent and on how many times it sent it.
//!
//! ## When to use the Mock vs a Real Server
//!
//! | Feature | MockTransport | HttpTransport + server |
//! |---------|---------------|------------------------|
//! | **Speed** | Instant (in-memory) | Real sockets |
//! | **Determinism** | 100% Deterministic | Subject to scheduler and network |
//! | **Error Injection** | Easy (`return_err`, `never_respond`) | Hard |
//! | **Call Counting** | Built in (`call_count`, `calls_to`) | Needs server-side bookkeeping |
//! | **Use Case** | Adapter and pipeline logic | Wire format, full-system flows |
//!
//! ## Usage
//!
//! ```rust
//! use relay_framework::mock::MockTransport;
//! use relay_framework::{DownstreamRequest, Transport, TransportError};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_post("/auth/validate").return_ok(json!({"valid": true}));
//!     mock.expect_get("/database/fetch")
//!         .return_err(TransportError::Connection("refused".into()));
//!
//!     let auth = mock
//!         .send(DownstreamRequest::post("/auth/validate", json!({})))
//!         .await;
//!     assert_eq!(auth.unwrap()["valid"], true);
//!
//!     let fetch = mock
//!         .send(DownstreamRequest::get("/database/fetch", vec![]))
//!         .await;
//!     assert!(fetch.is_err());
//!
//!     assert_eq!(mock.call_count(), 2);
//!     mock.verify(); // Ensures all expectations were consumed
//! }
//! ```
//!
//! ## Simulating Slow or Dead Services
//!
//! `after(duration)` delays the reply and `never_respond()` parks the call forever. Pair them
//! with `#[tokio::test(start_paused = true)]` so deadlines elapse in virtual time.

use crate::error::TransportError;
use crate::message::DownstreamRequest;
use crate::transport::Transport;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Reply {
    Ok(Value),
    Err(TransportError),
    Never,
}

/// One queued answer, matched against the next request in FIFO order.
struct Expectation {
    method: &'static str,
    path: String,
    delay: Option<Duration>,
    reply: Reply,
}

/// An in-memory transport with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(MockTransport::new());
/// mock.expect_post("/auth/validate").return_ok(json!({"valid": true}));
///
/// let client = AuthClient::new(mock.clone());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<DownstreamRequest>>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `GET` to `path`.
    pub fn expect_get(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect("GET", path.into())
    }

    /// Expects a `POST` to `path`.
    pub fn expect_post(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect("POST", path.into())
    }

    fn expect(&self, method: &'static str, path: String) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path,
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn calls(&self) -> Vec<DownstreamRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of requests received for `path`, regardless of method.
    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.path() == path)
            .count()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: DownstreamRequest) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(request.clone());
        let expectation = self.expectations.lock().unwrap().pop_front();

        let Some(expectation) = expectation else {
            panic!("Unexpected request: {request}");
        };
        if expectation.method != request.method() || expectation.path != request.path() {
            panic!(
                "Expectation mismatch: expected {} {}, got {request}",
                expectation.method, expectation.path
            );
        }

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }

        match expectation.reply {
            Reply::Ok(value) => Ok(value),
            Reply::Err(error) => Err(error),
            Reply::Never => std::future::pending().await,
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: &'static str,
    path: String,
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Delays the reply by `delay`.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Value) {
        self.push(Reply::Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: TransportError) {
        self.push(Reply::Err(error));
    }

    /// Sets the expectation to never answer.
    pub fn never_respond(self) {
        self.push(Reply::Never);
    }

    fn push(self, reply: Reply) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            path: self.path,
            delay: self.delay,
            reply,
        });
    }
}
