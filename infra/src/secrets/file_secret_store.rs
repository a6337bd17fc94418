//! Secret files on the local filesystem
//!
//! Function platforms mount each secret as a file (for example
//! `/var/openfaas/secrets/twilio-auth-token`). Files are read on every call
//! so a rotated secret is picked up without a restart.

use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, error};

use cv_core::services::{parse_secret, SecretStore};

use crate::SecretError;

/// Reads secrets from files, one secret per file
#[derive(Debug, Clone, Default)]
pub struct FileSecretStore;

impl FileSecretStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretStore for FileSecretStore {
    async fn read_secret(&self, path: &Path) -> Result<String, SecretError> {
        debug!(path = %path.display(), "Reading secret");

        let contents = tokio::fs::read_to_string(path).await.map_err(|source| {
            error!(path = %path.display(), error = %source, "Failed to read secret file");
            SecretError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let secret = parse_secret(&contents);
        if secret.is_empty() {
            return Err(SecretError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(secret.to_string())
    }
}
