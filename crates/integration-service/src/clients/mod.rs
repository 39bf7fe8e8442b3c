//! Typed adapters over [`DownstreamClient`](relay_framework::DownstreamClient), one per
//! downstream service.

pub mod auth_client;
pub mod data_client;
pub mod notify_client;

pub use auth_client::*;
pub use data_client::*;
pub use notify_client::*;

pub const AUTH_VALIDATE_PATH: &str = "/auth/validate";
pub const DATA_FETCH_PATH: &str = "/database/fetch";
pub const NOTIFY_SEND_PATH: &str = "/notification/send";
