//! Builds [`IntegrationResponse`] envelopes.
//!
//! Both builders stamp `processed_at` when called, so the timestamp marks completion.

use crate::model::IntegrationResponse;
use chrono::Utc;
use serde_json::{Map, Value};

pub fn build_success(request_id: &str, action: &str, data: Map<String, Value>) -> IntegrationResponse {
    IntegrationResponse {
        success: true,
        message: format!("Request processed successfully for action: {action}"),
        data: Some(data),
        processed_at: Utc::now(),
        request_id: request_id.to_string(),
    }
}

pub fn build_error(request_id: &str, message: &str) -> IntegrationResponse {
    IntegrationResponse {
        success: false,
        message: message.to_string(),
        data: None,
        processed_at: Utc::now(),
        request_id: request_id.to_string(),
    }
}
