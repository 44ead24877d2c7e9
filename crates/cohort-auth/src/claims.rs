use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AuthError;

/// Claims read from a session access token.
///
/// Decoded locally for display and expiry checks. The signature is NOT verified;
/// the hosted service does that on every request.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    /// Raw JWT string, sent as the bearer token.
    pub raw_jwt: String,
    /// Auth user ID (`sub` claim).
    pub user_id: String,
    /// Account email (`email` claim), when present.
    pub email: Option<String>,
    /// Token expiration time (from `exp` claim).
    pub expires_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawClaims {
    sub: Option<String>,
    email: Option<String>,
    exp: Option<i64>,
}

impl SessionClaims {
    /// Decode the payload segment of `jwt`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Parse` if the JWT format is invalid or the `sub`/`exp`
    /// claims are missing.
    pub fn decode(jwt: &str) -> Result<Self, AuthError> {
        let parts: Vec<&str> = jwt.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::Parse("invalid JWT format".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .map_err(|e| AuthError::Parse(format!("base64 decode failed: {e}")))?;
        let raw: RawClaims = serde_json::from_slice(&payload)
            .map_err(|e| AuthError::Parse(format!("JSON parse failed: {e}")))?;

        let user_id = raw
            .sub
            .ok_or_else(|| AuthError::Parse("missing sub claim".into()))?;
        let exp = raw
            .exp
            .ok_or_else(|| AuthError::Parse("missing exp claim".into()))?;
        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AuthError::Parse("invalid exp timestamp".into()))?;

        Ok(Self {
            raw_jwt: jwt.to_string(),
            user_id,
            email: raw.email,
            expires_at,
        })
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}

#[cfg(test)]
pub(crate) fn make_jwt(payload: &str) -> String {
    let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload);
    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
    format!("{header}.{payload}.{signature}")
}
