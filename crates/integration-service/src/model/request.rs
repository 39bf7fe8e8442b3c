use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An inbound orchestration request, as posted to `/api/process`.
///
/// All three string fields must be present for the payload to parse; their contents are
/// judged by the downstream services, not here.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationRequest {
    pub user_id: String,
    pub token: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl IntegrationRequest {
    pub fn new(
        user_id: impl Into<String>,
        token: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
            action: action.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Decodes a raw request body.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

// Tokens never reach the logs.
impl fmt::Debug for IntegrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationRequest")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .field("action", &self.action)
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// Per-request bookkeeping for one orchestration attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    pub request_id: String,
    pub started_at: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            started_at: Utc::now(),
        }
    }

    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_missing_metadata() {
        let body = br#"{"user_id":"user123","token":"valid_token123","action":"fetch_user_data"}"#;
        let request = IntegrationRequest::parse(body).unwrap();
        assert_eq!(
            request,
            IntegrationRequest::new("user123", "valid_token123", "fetch_user_data")
        );
    }

    #[test]
    fn test_parse_keeps_metadata() {
        let body = br#"{"user_id":"u","token":"t","action":"a","metadata":{"source":"cli"}}"#;
        let request = IntegrationRequest::parse(body).unwrap();
        let metadata = request.metadata.unwrap();
        assert_eq!(metadata.get("source").map(String::as_str), Some("cli"));
    }

    #[test]
    fn test_metadata_round_trips_on_the_wire() {
        let metadata = HashMap::from([("source".to_string(), "cli".to_string())]);
        let request = IntegrationRequest::new("u", "t", "a").with_metadata(metadata.clone());

        let wire = serde_json::to_vec(&request).unwrap();
        assert_eq!(IntegrationRequest::parse(&wire).unwrap().metadata, Some(metadata));

        let bare = serde_json::to_value(IntegrationRequest::new("u", "t", "a")).unwrap();
        assert!(bare.get("metadata").is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_payloads() {
        assert!(IntegrationRequest::parse(b"not json").is_err());
        assert!(IntegrationRequest::parse(br#"{"user_id":"u","action":"a"}"#).is_err());
        assert!(IntegrationRequest::parse(br#"{"user_id":1,"token":"t","action":"a"}"#).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let request = IntegrationRequest::new("user123", "valid_secret", "fetch_user_data");
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("valid_secret"));
        assert!(rendered.contains("user123"));
    }
}
