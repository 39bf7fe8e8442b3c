//! Simulated downstream services.
//!
//! Stand-ins for a real auth provider, database and notifier, with randomized latency
//! and payloads. The pipeline only ever sees them through
//! [`HttpTransport`](relay_framework::HttpTransport).

use crate::model::{AuthCheck, AuthOutcome, FetchOutcome, NotifyMessage, NotifyOutcome};
use axum::body::Bytes;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration as TimeDelta, SecondsFormat, Utc};
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing::info;

/// Tokens are valid iff they start with this prefix and are longer than it.
pub const VALID_TOKEN_PREFIX: &str = "valid_";

type Rejection = (StatusCode, &'static str);

pub fn token_is_valid(token: &str) -> bool {
    token.len() > VALID_TOKEN_PREFIX.len() && token.starts_with(VALID_TOKEN_PREFIX)
}

async fn simulate_latency(min_ms: u64, max_ms: u64) {
    let millis = rand::thread_rng().gen_range(min_ms..max_ms);
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

/// `POST /auth/validate`
pub async fn validate_token(body: Bytes) -> Result<Json<AuthOutcome>, Rejection> {
    simulate_latency(50, 150).await;

    let check: AuthCheck =
        serde_json::from_slice(&body).map_err(|_| (StatusCode::BAD_REQUEST, "Invalid request"))?;
    let valid = token_is_valid(&check.token);
    info!(service = "auth", user_id = %check.user_id, valid, "Validated token");

    let message = if valid { "Token validated" } else { "Invalid token" };
    Ok(Json(AuthOutcome {
        valid,
        user_id: check.user_id,
        message: message.to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct FetchQuery {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub action: String,
}

/// `GET /database/fetch`
pub async fn fetch_record(Query(query): Query<FetchQuery>) -> Json<FetchOutcome> {
    simulate_latency(100, 300).await;

    let data = simulated_record(&query.user_id, &query.action);
    info!(service = "database", user_id = %query.user_id, action = %query.action, "Fetched data");

    Json(FetchOutcome {
        success: true,
        data,
    })
}

pub fn simulated_record(user_id: &str, action: &str) -> Map<String, Value> {
    let mut rng = rand::thread_rng();
    let last_access = (Utc::now() - TimeDelta::hours(24)).to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut data = Map::new();
    data.insert("user_id".into(), json!(user_id));
    data.insert("action".into(), json!(action));
    data.insert("records".into(), json!(rng.gen_range(1..=100)));
    data.insert("last_access".into(), json!(last_access));
    data.insert("permissions".into(), json!(["read", "write", "execute"]));
    data.insert("quota_remaining".into(), json!(rng.gen_range(0..1000)));
    data
}

/// `POST /notification/send`
pub async fn send_notification(body: Bytes) -> Result<Json<NotifyOutcome>, Rejection> {
    simulate_latency(30, 100).await;

    let notice: NotifyMessage =
        serde_json::from_slice(&body).map_err(|_| (StatusCode::BAD_REQUEST, "Invalid request"))?;
    info!(service = "notification", user_id = %notice.user_id, "Sent notification");

    Ok(Json(NotifyOutcome {
        sent: true,
        message: format!("Notification sent to user {}", notice.user_id),
    }))
}
