//! Error types for the adapters, the pipeline, and service bootstrap.

use axum::http::StatusCode;
use relay_framework::TransportError;
use thiserror::Error;

/// Errors from the auth adapter. A rejected token is *not* an error: it is an
/// [`AuthOutcome`](crate::model::AuthOutcome) with `valid == false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Auth service call failed: {0}")]
    Unavailable(#[from] TransportError),
}

/// Errors from the data adapter.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataError {
    /// The action is destructive and destructive actions are disabled.
    #[error("Action {0} is not enabled")]
    PolicyBlocked(String),

    /// The service answered but reported `success: false`.
    #[error("Data service reported failure for action {0}")]
    Rejected(String),

    #[error("Data service call failed: {0}")]
    Unavailable(#[from] TransportError),
}

/// Errors from the notify adapter. Never surfaced to callers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifyError {
    #[error("Notification service call failed: {0}")]
    Unavailable(#[from] TransportError),
}

/// Terminal failure of a pipeline run.
///
/// The `Display` text is the exact message returned to the caller.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Failure {
    #[error("Invalid request body")]
    BadRequest,

    #[error("Auth service unavailable")]
    AuthServiceUnavailable,

    #[error("Authentication failed")]
    AuthRejected,

    #[error("Database service unavailable")]
    DataServiceUnavailable,
}

impl Failure {
    pub fn status(&self) -> StatusCode {
        match self {
            Failure::BadRequest => StatusCode::BAD_REQUEST,
            Failure::AuthServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Failure::AuthRejected => StatusCode::UNAUTHORIZED,
            Failure::DataServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Failure::BadRequest => "Invalid request body",
            Failure::AuthServiceUnavailable => "Auth service unavailable",
            Failure::AuthRejected => "Authentication failed",
            Failure::DataServiceUnavailable => "Database service unavailable",
        }
    }

    /// Stable snake_case name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::BadRequest => "bad_request",
            Failure::AuthServiceUnavailable => "auth_service_unavailable",
            Failure::AuthRejected => "auth_rejected",
            Failure::DataServiceUnavailable => "data_service_unavailable",
        }
    }
}

impl From<AuthError> for Failure {
    fn from(_: AuthError) -> Self {
        Failure::AuthServiceUnavailable
    }
}

impl From<DataError> for Failure {
    fn from(_: DataError) -> Self {
        Failure::DataServiceUnavailable
    }
}

/// Errors raised while starting or stopping the service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Server task failed: {0}")]
    Server(String),
}
