//! # System Lifecycle
//!
//! Starts, wires and stops the service.
//!
//! The adapters are built once over a single shared [`Transport`](relay_framework::Transport)
//! and handed to the [`Pipeline`](crate::orchestration::Pipeline), which is then mounted
//! on the axum router next to the simulated collaborators.
//!
//! ```rust,ignore
//! let system = IntegrationSystem::start(&Config::from_env()).await?;
//! tokio::signal::ctrl_c().await?;
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Signal the server** - the oneshot sender fires axum's graceful-shutdown future
//! 2. **Drain** - in-flight requests finish; no new connections are accepted
//! 3. **Await completion** - the server task is joined and its result surfaced
//!
//! ## Downstream Wiring
//!
//! With no `DOWNSTREAM_BASE_URL`, the adapters call back into this same server, where
//! the simulated collaborators live. An unspecified bind address (`0.0.0.0`) is
//! reached through loopback.

pub mod integration_system;

pub use integration_system::*;
