//! # Auth Client
//!
//! Asks the auth service whether a token is valid for a user.
use crate::clients::AUTH_VALIDATE_PATH;
use crate::error::AuthError;
use crate::model::AuthOutcome;
use async_trait::async_trait;
use relay_framework::{DownstreamClient, DownstreamRequest, Transport, TransportError};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the auth service.
#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<dyn Transport>,
}

impl AuthClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Validates `token` for `user_id`.
    ///
    /// `Ok` with `valid == false` means the service rejected the token; `Err` means the
    /// service could not be asked.
    #[instrument(skip(self, token))]
    pub async fn check(&self, token: &str, user_id: &str) -> Result<AuthOutcome, AuthError> {
        debug!("Sending request");
        let request = DownstreamRequest::post(
            AUTH_VALIDATE_PATH,
            json!({ "token": token, "user_id": user_id }),
        );
        self.dispatch_as(request).await
    }
}

#[async_trait]
impl DownstreamClient for AuthClient {
    type Error = AuthError;

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    fn map_error(e: TransportError) -> Self::Error {
        AuthError::Unavailable(e)
    }
}
