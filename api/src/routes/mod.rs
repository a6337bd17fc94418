//! Route handlers
//!
//! - `check_verify` - the function entry point
//! - `health` - liveness probe

pub mod check_verify;
pub mod health;

use std::sync::Arc;

use cv_core::services::{CheckVerifyService, SecretStore, VerificationProvider};

/// Application state that holds shared services
pub struct AppState<P, S>
where
    P: VerificationProvider,
    S: SecretStore,
{
    pub check_verify_service: Arc<CheckVerifyService<P, S>>,
    /// Largest request body accepted by `POST /`
    pub max_payload_size: usize,
}

impl<P, S> AppState<P, S>
where
    P: VerificationProvider,
    S: SecretStore,
{
    pub fn new(check_verify_service: Arc<CheckVerifyService<P, S>>, max_payload_size: usize) -> Self {
        Self {
            check_verify_service,
            max_payload_size,
        }
    }
}
