//! HTTP surface built on axum.
//!
//! - `POST /api/process` runs the orchestration pipeline
//! - `GET /health` reports liveness
//! - `POST /auth/validate`, `GET /database/fetch`, `POST /notification/send` are the
//!   simulated downstream services (see [`collaborators`])

pub mod collaborators;
pub mod handlers;

use crate::clients::{AUTH_VALIDATE_PATH, DATA_FETCH_PATH, NOTIFY_SEND_PATH};
use crate::orchestration::Pipeline;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/process", post(handlers::process))
        .route("/health", get(handlers::health))
        .merge(collaborator_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The simulated auth, data and notification services, without the orchestration routes.
pub fn collaborator_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(AUTH_VALIDATE_PATH, post(collaborators::validate_token))
        .route(DATA_FETCH_PATH, get(collaborators::fetch_record))
        .route(NOTIFY_SEND_PATH, post(collaborators::send_notification))
}
