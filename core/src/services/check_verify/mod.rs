//! Verification check service module
//!
//! This module implements the check pipeline:
//! - Request validation (see [`CheckVerifyRequest`](crate::domain::CheckVerifyRequest))
//! - Form-encoded request body construction
//! - Basic auth header construction from secret files
//! - The provider call, through the [`VerificationProvider`] port
//! - Provider response validation and mapping to a function response

mod auth_header;
mod request_builder;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use auth_header::{build_auth_headers, parse_secret};
pub use request_builder::build_request_body;
pub use service::CheckVerifyService;
pub use traits::{ProviderRequest, SecretStore, VerificationProvider};
