//! The orchestration core: one inbound request in, one correlated response out.
//!
//! - [`correlator`] names the request.
//! - [`pipeline`] walks it through auth, fetch and notify.
//! - [`assembler`] shapes the envelope the caller sees.

pub mod assembler;
pub mod correlator;
pub mod pipeline;

pub use pipeline::*;
