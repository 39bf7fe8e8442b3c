//! # Orchestration Pipeline
//!
//! Drives one request through a fixed sequence of stages:
//!
//! ```text
//! Received -> Authenticating -> Fetching -> Notifying -> Responding -> Done
//!     |             |               |
//!     v             v               v
//! Failed(BadRequest)  Failed(AuthServiceUnavailable | AuthRejected)  Failed(DataServiceUnavailable)
//! ```
//!
//! Auth and fetch are hard dependencies: the first error ends the run. Notify is a soft
//! dependency: its errors are logged and recorded on the [`Timeline`] but never change
//! the response. Calls are strictly sequential, and fetch always completes before notify
//! starts. Each call is bounded by its adapter's deadline; nothing is retried.

use crate::clients::{AuthClient, DataClient, NotifyClient};
use crate::error::Failure;
use crate::model::{IntegrationRequest, IntegrationResponse, RequestContext};
use crate::orchestration::{assembler, correlator};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::{info, info_span, warn, Instrument};

/// A state of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    Authenticating,
    Fetching,
    Notifying,
    Responding,
    Done,
    Failed(Failure),
}

/// Something that happened during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Entered(Stage),
    /// The auth service answered `valid: false`, with its message.
    AuthRejected(String),
    /// The notify call failed; the run carried on.
    NotifyFailed(String),
    /// The notify service answered but did not send.
    NotifyNotSent,
    Completed { elapsed_ms: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub at: DateTime<Utc>,
    pub event: Event,
}

/// Ordered record of a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    fn record(&mut self, event: Event) {
        self.entries.push(TimelineEntry {
            at: Utc::now(),
            event,
        });
    }

    fn enter(&mut self, stage: Stage) {
        self.record(Event::Entered(stage));
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Stages in the order they were entered.
    pub fn stages(&self) -> Vec<Stage> {
        self.entries
            .iter()
            .filter_map(|entry| match entry.event {
                Event::Entered(stage) => Some(stage),
                _ => None,
            })
            .collect()
    }

    pub fn final_stage(&self) -> Option<Stage> {
        self.stages().last().copied()
    }

    pub fn notify_failed(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry.event, Event::NotifyFailed(_)))
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct Processed {
    pub context: RequestContext,
    pub status: StatusCode,
    pub response: IntegrationResponse,
    pub failure: Option<Failure>,
    pub timeline: Timeline,
}

/// The orchestration pipeline. Cheap to clone: the adapters share their transport.
#[derive(Clone)]
pub struct Pipeline {
    auth: AuthClient,
    data: DataClient,
    notify: NotifyClient,
}

impl Pipeline {
    pub fn new(auth: AuthClient, data: DataClient, notify: NotifyClient) -> Self {
        Self { auth, data, notify }
    }

    /// Runs a raw inbound body through the pipeline.
    ///
    /// Always produces exactly one response, carrying the request id generated here.
    pub async fn process(&self, body: &[u8]) -> Processed {
        let context = correlator::begin();
        let span = info_span!("integration_request", request_id = %context.request_id);
        self.run(context, body).instrument(span).await
    }

    async fn run(&self, context: RequestContext, body: &[u8]) -> Processed {
        let mut timeline = Timeline::default();
        timeline.enter(Stage::Received);
        info!("Received integration request");

        let result = self.orchestrate(body, &mut timeline).await;

        let (status, response, failure) = match result {
            Ok((action, data)) => {
                timeline.enter(Stage::Responding);
                let response = assembler::build_success(&context.request_id, &action, data);
                timeline.enter(Stage::Done);
                (StatusCode::OK, response, None)
            }
            Err(failure) => {
                timeline.enter(Stage::Failed(failure));
                warn!(failure = failure.kind(), "Request failed");
                let response = assembler::build_error(&context.request_id, failure.message());
                (failure.status(), response, Some(failure))
            }
        };

        let elapsed_ms = context.elapsed_ms();
        timeline.record(Event::Completed { elapsed_ms });
        info!(elapsed_ms, success = response.success, "Processing complete");

        Processed {
            context,
            status,
            response,
            failure,
            timeline,
        }
    }

    async fn orchestrate(
        &self,
        body: &[u8],
        timeline: &mut Timeline,
    ) -> Result<(String, Map<String, Value>), Failure> {
        let request = IntegrationRequest::parse(body).map_err(|e| {
            warn!(error = %e, "Failed to parse request");
            Failure::BadRequest
        })?;
        info!(user_id = %request.user_id, action = %request.action, "Request parsed");

        // Step 1: auth (hard)
        timeline.enter(Stage::Authenticating);
        info!("Calling auth service");
        let outcome = self
            .auth
            .check(&request.token, &request.user_id)
            .await
            .map_err(|e| {
                warn!(error = %e, "Auth service error");
                Failure::from(e)
            })?;
        if !outcome.valid {
            warn!(message = %outcome.message, "Authentication failed");
            timeline.record(Event::AuthRejected(outcome.message));
            return Err(Failure::AuthRejected);
        }
        info!("Auth validated");

        // Step 2: fetch (hard)
        timeline.enter(Stage::Fetching);
        info!("Calling data service");
        let data = self
            .data
            .fetch(&request.user_id, &request.action)
            .await
            .map_err(|e| {
                warn!(error = %e, "Data service error");
                Failure::from(e)
            })?;
        info!(field_count = data.len(), "Data fetched");

        // Step 3: notify (soft)
        timeline.enter(Stage::Notifying);
        info!("Calling notification service");
        match self.notify.send(&request.user_id, &request.action).await {
            Ok(true) => info!("Notification sent"),
            Ok(false) => {
                warn!("Notification service did not send");
                timeline.record(Event::NotifyNotSent);
            }
            Err(e) => {
                warn!(error = %e, "Notification service error");
                warn!("Continuing despite notification failure");
                timeline.record(Event::NotifyFailed(e.to_string()));
            }
        }

        Ok((request.action, data))
    }
}
