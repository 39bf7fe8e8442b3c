//! # Data Client
//!
//! Fetches the record an action operates on. Destructive actions are gated by a flag fixed
//! at construction time.
use crate::clients::DATA_FETCH_PATH;
use crate::error::DataError;
use crate::model::FetchOutcome;
use async_trait::async_trait;
use relay_framework::{DownstreamClient, DownstreamRequest, Transport, TransportError};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Actions that modify or remove data.
pub const DESTRUCTIVE_ACTIONS: &[&str] = &["delete_user"];

pub fn is_destructive(action: &str) -> bool {
    DESTRUCTIVE_ACTIONS.contains(&action)
}

/// Client for the data service.
#[derive(Clone)]
pub struct DataClient {
    transport: Arc<dyn Transport>,
    destructive_actions_enabled: bool,
}

impl DataClient {
    pub fn new(transport: Arc<dyn Transport>, destructive_actions_enabled: bool) -> Self {
        Self {
            transport,
            destructive_actions_enabled,
        }
    }

    pub fn destructive_actions_enabled(&self) -> bool {
        self.destructive_actions_enabled
    }

    /// Fetches the data for `action` on behalf of `user_id`.
    ///
    /// A destructive action with the flag off fails with [`DataError::PolicyBlocked`]
    /// before anything is sent.
    #[instrument(skip(self))]
    pub async fn fetch(&self, user_id: &str, action: &str) -> Result<Map<String, Value>, DataError> {
        if is_destructive(action) && !self.destructive_actions_enabled {
            warn!("Destructive action blocked by policy");
            return Err(DataError::PolicyBlocked(action.to_string()));
        }

        debug!("Sending request");
        let request = DownstreamRequest::get(
            DATA_FETCH_PATH,
            vec![
                ("user_id".to_string(), user_id.to_string()),
                ("action".to_string(), action.to_string()),
            ],
        );
        let outcome: FetchOutcome = self.dispatch_as(request).await?;
        if !outcome.success {
            return Err(DataError::Rejected(action.to_string()));
        }
        Ok(outcome.data)
    }
}

#[async_trait]
impl DownstreamClient for DataClient {
    type Error = DataError;

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    fn map_error(e: TransportError) -> Self::Error {
        DataError::Unavailable(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_framework::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_forwards_data_verbatim() {
        let mock = Arc::new(MockTransport::new());
        let data = json!({
            "user_id": "user123",
            "action": "fetch_user_data",
            "records": 42,
            "permissions": ["read", "write", "execute"]
        });
        mock.expect_get(DATA_FETCH_PATH)
            .return_ok(json!({"success": true, "data": data.clone()}));
        let client = DataClient::new(mock.clone(), false);

        let fetched = client.fetch("user123", "fetch_user_data").await.unwrap();

        assert_eq!(Value::Object(fetched), data);
        let call = &mock.calls()[0];
        assert_eq!(call.query_param("user_id"), Some("user123"));
        assert_eq!(call.query_param("action"), Some("fetch_user_data"));
    }

    #[tokio::test]
    async fn test_destructive_action_blocked_without_call() {
        let mock = Arc::new(MockTransport::new());
        let client = DataClient::new(mock.clone(), false);
        assert!(!client.destructive_actions_enabled());

        let result = client.fetch("user123", "delete_user").await;

        assert_eq!(result, Err(DataError::PolicyBlocked("delete_user".into())));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_destructive_action_allowed_when_enabled() {
        let mock = Arc::new(MockTransport::new());
        mock.expect_get(DATA_FETCH_PATH)
            .return_ok(json!({"success": true, "data": {"deleted": true}}));
        let client = DataClient::new(mock.clone(), true);
        assert!(client.destructive_actions_enabled());

        let fetched = client.fetch("user123", "delete_user").await.unwrap();

        assert_eq!(fetched.get("deleted"), Some(&json!(true)));
        assert_eq!(mock.calls_to(DATA_FETCH_PATH), 1);
    }

    #[tokio::test]
    async fn test_unsuccessful_answer_is_rejected() {
        let mock = Arc::new(MockTransport::new());
        mock.expect_get(DATA_FETCH_PATH)
            .return_ok(json!({"success": false}));
        let client = DataClient::new(mock.clone(), false);

        let result = client.fetch("user123", "fetch_user_data").await;

        assert_eq!(result, Err(DataError::Rejected("fetch_user_data".into())));
    }

    #[tokio::test]
    async fn test_transport_failure_is_unavailable() {
        let mock = Arc::new(MockTransport::new());
        mock.expect_get(DATA_FETCH_PATH).return_err(TransportError::Status {
            status: 502,
            path: DATA_FETCH_PATH.into(),
        });
        let client = DataClient::new(mock.clone(), false);

        let result = client.fetch("user123", "fetch_user_data").await;

        assert!(matches!(result, Err(DataError::Unavailable(_))));
    }

    #[test]
    fn test_is_destructive() {
        assert!(is_destructive("delete_user"));
        assert!(!is_destructive("fetch_user_data"));
        assert!(!is_destructive("DELETE_USER"));
    }
}
