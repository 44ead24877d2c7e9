//! # cohort-auth
//!
//! Email + password authentication for the Cohort CLI against the hosted auth API.
//!
//! Provides sign-in, sign-up, password recovery, session refresh and logout
//! (`reqwest`), local JWT claim decoding, and OS keychain credential storage
//! (`keyring`) with a file fallback.

pub mod claims;
pub mod client;
pub mod error;
mod http;
pub mod refresh;
pub mod session;
pub mod token_store;

pub use claims::SessionClaims;
pub use client::AuthClient;
pub use error::AuthError;
pub use session::{AuthUser, Credentials, Session, SignUpOutcome};

/// Sign in and persist the resulting session.
///
/// # Errors
///
/// Returns the sign-in error, or `AuthError::TokenStoreError` if the session
/// cannot be stored.
pub async fn login(client: &AuthClient, email: &str, password: &str) -> Result<Session, AuthError> {
    let session = client.sign_in_with_password(email, password).await?;
    token_store::store(&session.credentials())?;
    Ok(session)
}

/// Stored credentials, if any. Does NOT refresh or validate them.
#[must_use]
pub fn resolve_token() -> Option<Credentials> {
    token_store::load()
}

/// Revoke the stored session (best-effort) and clear local credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub async fn logout(client: Option<&AuthClient>) -> Result<(), AuthError> {
    if let (Some(client), Some(credentials)) = (client, token_store::load())
        && let Err(error) = client.logout(&credentials.access_token).await
    {
        tracing::warn!(%error, "server-side logout failed; clearing local credentials anyway");
    }
    token_store::delete()
}
