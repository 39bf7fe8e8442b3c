use crate::api::AppState;
use crate::model::IntegrationResponse;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `POST /api/process`. The body is read raw so that malformed JSON still gets the
/// standard error envelope with a request id.
pub async fn process(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<IntegrationResponse>) {
    let processed = state.pipeline.process(&body).await;
    (processed.status, Json(processed.response))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub services: BTreeMap<String, String>,
}

/// `GET /health`
pub async fn health() -> Json<HealthReport> {
    let services = ["auth", "database", "notification"]
        .into_iter()
        .map(|name| (name.to_string(), "operational".to_string()))
        .collect();

    Json(HealthReport {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        services,
    })
}
