use cohort_auth::SessionClaims;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

impl AuthStatusResponse {
    const fn signed_out(note: String) -> Self {
        Self {
            authenticated: false,
            user_id: None,
            email: None,
            expires_at: None,
            token_source: None,
            note: Some(note),
        }
    }
}

/// Report the stored session from local claims; no network call.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match cohort_auth::resolve_token() {
        None => AuthStatusResponse::signed_out("no stored session; run `cohort auth login`".into()),
        Some(credentials) => status_for(&credentials.access_token, credentials.refresh_token.is_some()),
    };
    output(&status, flags.format)
}

fn status_for(access_token: &str, refreshable: bool) -> AuthStatusResponse {
    match SessionClaims::decode(access_token) {
        Ok(claims) => {
            let expired = claims.is_near_expiry(0);
            AuthStatusResponse {
                authenticated: !expired || refreshable,
                expires_at: Some(claims.expires_at.to_rfc3339()),
                user_id: Some(claims.user_id),
                email: claims.email,
                token_source: cohort_auth::token_store::detect_token_source(),
                note: (expired && refreshable)
                    .then(|| "access token expired; it will be refreshed on next use".to_string()),
            }
        }
        Err(error) => AuthStatusResponse::signed_out(format!("stored token is unreadable: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use super::status_for;

    #[test]
    fn garbage_token_reports_signed_out() {
        let status = status_for("not-a-jwt", true);
        assert!(!status.authenticated);
        assert!(status.note.is_some_and(|note| note.contains("unreadable")));
    }
}
