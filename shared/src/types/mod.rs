//! Type definitions module
//!
//! - `response` - Function response wire shape and health checks

pub mod response;

pub use response::{FunctionResponse, HealthResponse, HealthStatus};
