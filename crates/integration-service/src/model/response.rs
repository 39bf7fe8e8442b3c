use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The single externally visible result of one pipeline run.
///
/// `data` is present exactly when `success` is true; it is skipped on the wire otherwise.
/// Build these through [`assembler`](crate::orchestration::assembler) rather than by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    pub processed_at: DateTime<Utc>,
    pub request_id: String,
}
