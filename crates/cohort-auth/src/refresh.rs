use crate::claims::SessionClaims;
use crate::client::AuthClient;
use crate::error::AuthError;
use crate::session::Credentials;

pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// What to do with stored credentials before using them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenAction {
    /// Token is fresh (or opaque); use as-is.
    Use(String),
    /// Token is near expiry and a refresh token is available.
    Refresh(String),
    /// Token is near expiry and cannot be refreshed.
    Expired,
}

/// Decide whether stored credentials can be used directly.
///
/// Tokens whose claims cannot be decoded are passed through untouched; the
/// service is the final judge of their validity.
#[must_use]
pub fn plan(credentials: &Credentials) -> TokenAction {
    let near_expiry = SessionClaims::decode(&credentials.access_token)
        .is_ok_and(|claims| claims.is_near_expiry(EXPIRY_BUFFER_SECS));
    if !near_expiry {
        return TokenAction::Use(credentials.access_token.clone());
    }
    match &credentials.refresh_token {
        Some(refresh_token) if !refresh_token.is_empty() => {
            TokenAction::Refresh(refresh_token.clone())
        }
        _ => TokenAction::Expired,
    }
}

/// Resolve a usable access token from the token store, refreshing if needed.
///
/// Returns `Ok(None)` when nothing is stored.
///
/// # Errors
///
/// Returns `AuthError::TokenExpired` if the stored token expired and cannot be
/// refreshed, or the refresh request's error.
pub async fn resolve_access_token(client: &AuthClient) -> Result<Option<String>, AuthError> {
    let Some(credentials) = crate::token_store::load() else {
        return Ok(None);
    };

    match plan(&credentials) {
        TokenAction::Use(token) => Ok(Some(token)),
        TokenAction::Expired => Err(AuthError::TokenExpired),
        TokenAction::Refresh(refresh_token) => {
            tracing::debug!("access token near expiry; refreshing session");
            let session = client.refresh(&refresh_token).await?;
            crate::token_store::store(&session.credentials())?;
            Ok(Some(session.access_token))
        }
    }
}
