//! Basic auth header construction

use tracing::debug;

use cv_shared::CheckVerifySettings;

use super::traits::SecretStore;
use crate::domain::AuthHeaders;
use crate::errors::SecretError;

/// Extract a secret from the contents of a secret file
///
/// Only the first line counts; surrounding whitespace and the line
/// terminator are stripped.
pub fn parse_secret(contents: &str) -> &str {
    contents.lines().next().unwrap_or_default().trim()
}

/// Read the account SID and auth token and build the request headers
///
/// Secrets are read on every call, the SID first. A missing or unreadable
/// file fails the call.
pub async fn build_auth_headers<S>(
    secrets: &S,
    settings: &CheckVerifySettings,
) -> Result<AuthHeaders, SecretError>
where
    S: SecretStore + ?Sized,
{
    debug!("Building provider auth headers");
    let account_sid = secrets.read_secret(&settings.twilio_account_sid_path).await?;
    let auth_token = secrets.read_secret(&settings.twilio_auth_token_path).await?;

    Ok(AuthHeaders::basic(&account_sid, &auth_token))
}
