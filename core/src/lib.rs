//! # Check Verify Core
//!
//! Core domain layer for the check-verify adapter. This crate holds the
//! request and result types, the error taxonomy, the request and header
//! builders, the ports the infrastructure layer implements, and the
//! `CheckVerifyService` pipeline that ties them together.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
