//! # Downstream Requests
//!
//! This module defines the request type handed to a [`Transport`](crate::Transport).

use serde_json::Value;
use std::fmt;

/// A single outbound call to a downstream service.
///
/// Requests carry everything the transport needs and nothing else: no hidden headers,
/// no session state. Two requests built from the same inputs are equal, which is what
/// lets the [`mock`](crate::mock) module record and assert on them.
#[derive(Debug, Clone, PartialEq)]
pub enum DownstreamRequest {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    Post {
        path: String,
        body: Value,
    },
}

impl DownstreamRequest {
    pub fn get(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        DownstreamRequest::Get {
            path: path.into(),
            query,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        DownstreamRequest::Post {
            path: path.into(),
            body,
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            DownstreamRequest::Get { .. } => "GET",
            DownstreamRequest::Post { .. } => "POST",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            DownstreamRequest::Get { path, .. } | DownstreamRequest::Post { path, .. } => path,
        }
    }

    /// Looks up a query parameter. Always `None` for POST requests.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        match self {
            DownstreamRequest::Get { query, .. } => query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            DownstreamRequest::Post { .. } => None,
        }
    }

    /// The JSON body of a POST request.
    pub fn body(&self) -> Option<&Value> {
        match self {
            DownstreamRequest::Post { body, .. } => Some(body),
            DownstreamRequest::Get { .. } => None,
        }
    }
}

impl fmt::Display for DownstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
