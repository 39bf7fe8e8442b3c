//! Pure data structures (DTOs) exchanged with callers and downstream services.

pub mod outcome;
pub mod request;
pub mod response;

pub use outcome::*;
pub use request::*;
pub use response::*;
