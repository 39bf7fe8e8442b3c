//! # Integration Service
//!
//! Accepts an integration request, then runs auth, data fetch and notification against
//! three downstream services and returns a single response.
//!
//! - **[orchestration]**: The [`Pipeline`](orchestration::Pipeline) plus request id generation and response assembly.
//! - **[clients]**: Typed adapters, one per downstream service, built on `relay_framework`.
//! - **[model]**: Pure data structures exchanged with callers and downstream services.
//! - **[api]**: axum routes, including the simulated downstream services.
//! - **[lifecycle]**: Starts and stops the whole thing.
//!
//! ## 🧪 Testing
//!
//! See [`relay_framework::mock`] for driving the pipeline without a network.

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod orchestration;
