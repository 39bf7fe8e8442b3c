//! # Notify Client
//!
//! Tells the notification service that an action completed. Callers treat every failure
//! here as non-fatal.
use crate::clients::NOTIFY_SEND_PATH;
use crate::error::NotifyError;
use crate::model::NotifyOutcome;
use async_trait::async_trait;
use relay_framework::{DownstreamClient, DownstreamRequest, Transport, TransportError};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the notification service.
#[derive(Clone)]
pub struct NotifyClient {
    transport: Arc<dyn Transport>,
}

impl NotifyClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends the completion notice for `action`. Returns whether the service accepted it.
    #[instrument(skip(self))]
    pub async fn send(&self, user_id: &str, action: &str) -> Result<bool, NotifyError> {
        debug!("Sending request");
        let request = DownstreamRequest::post(
            NOTIFY_SEND_PATH,
            json!({
                "user_id": user_id,
                "message": completion_message(action),
            }),
        );
        let outcome: NotifyOutcome = self.dispatch_as(request).await?;
        debug!(sent = outcome.sent, message = %outcome.message, "Notification answered");
        Ok(outcome.sent)
    }
}

pub fn completion_message(action: &str) -> String {
    format!("Action '{action}' completed successfully")
}

#[async_trait]
impl DownstreamClient for NotifyClient {
    type Error = NotifyError;

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    fn map_error(e: TransportError) -> Self::Error {
        NotifyError::Unavailable(e)
    }
}
