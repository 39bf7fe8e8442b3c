//! Answers from the downstream services, plus the bodies sent to them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /auth/validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthCheck {
    pub token: String,
    pub user_id: String,
}

/// Answer of `POST /auth/validate`. Only `valid` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub valid: bool,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub message: String,
}

/// Answer of `GET /database/fetch`. `data` is forwarded to the caller untouched.
///
/// A missing `success` counts as success; only an explicit `false` is a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchOutcome {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// Body of `POST /notification/send`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyMessage {
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyOutcome {
    pub sent: bool,
    #[serde(default)]
    pub message: String,
}

fn default_success() -> bool {
    true
}
