//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. Everything else in the workspace
//! only emits events through the `tracing` macros.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG` and falls back to `info`:
//!
//! ```bash
//! # Step-by-step timeline of every request
//! RUST_LOG=info cargo run
//!
//! # Full outbound payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the orchestration core
//! RUST_LOG=integration_service::orchestration=debug cargo run
//! ```
//!
//! ## Request Timeline
//!
//! Each inbound request runs inside an `integration_request` span carrying its
//! `request_id`, so with the compact format every line of one request shares a prefix:
//!
//! ```text
//! INFO integration_request{request_id=REQ-1760600000-4821}: Received integration request
//! INFO integration_request{request_id=REQ-1760600000-4821}: Calling auth service
//! INFO integration_request{request_id=REQ-1760600000-4821}: Auth validated
//! INFO integration_request{request_id=REQ-1760600000-4821}: Calling data service
//! INFO integration_request{request_id=REQ-1760600000-4821}: Data fetched
//! INFO integration_request{request_id=REQ-1760600000-4821}: Calling notification service
//! WARN integration_request{request_id=REQ-1760600000-4821}: Continuing despite notification failure
//! INFO integration_request{request_id=REQ-1760600000-4821}: Processing complete elapsed_ms=212
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
