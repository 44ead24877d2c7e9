//! Session payloads returned by the auth service and the credentials kept locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::claims::SessionClaims;

/// An authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A signed-in session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp; older service versions only send `expires_in`.
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

impl Session {
    /// Expiry from `expires_at`, else from the access token's `exp` claim.
    #[must_use]
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .or_else(|| {
                SessionClaims::decode(&self.access_token)
                    .ok()
                    .map(|claims| claims.expires_at)
            })
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            access_token: self.access_token.clone(),
            refresh_token: Some(self.refresh_token.clone()),
        }
    }
}

/// Result of a sign-up request.
///
/// Projects with auto-confirm return a session immediately; otherwise the
/// account waits for email confirmation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpOutcome {
    SessionIssued(Session),
    ConfirmationRequired(AuthUser),
}

impl SignUpOutcome {
    #[must_use]
    pub const fn user(&self) -> &AuthUser {
        match self {
            Self::SessionIssued(session) => &session.user,
            Self::ConfirmationRequired(user) => user,
        }
    }
}

/// Tokens persisted between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl Credentials {
    /// Parse stored content: a JSON credentials object, or a bare access token.
    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with('{') {
            return serde_json::from_str(trimmed).ok();
        }
        Some(Self {
            access_token: trimmed.to_string(),
            refresh_token: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::claims::make_jwt;

    const SESSION_FIXTURE: &str = r#"{
        "access_token": "a.b.c",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1893456000,
        "refresh_token": "r-123",
        "user": { "id": "5f1c-user", "email": "ana@example.edu", "role": "authenticated" }
    }"#;

    #[test]
    fn parses_session_fixture() {
        let session: Session = serde_json::from_str(SESSION_FIXTURE).expect("parse");
        assert_eq!(session.refresh_token, "r-123");
        assert_eq!(session.user.email.as_deref(), Some("ana@example.edu"));
        assert_eq!(session.expiry().map(|d| d.timestamp()), Some(1_893_456_000));
    }

    #[test]
    fn expiry_falls_back_to_token_claim() {
        let session = Session {
            access_token: make_jwt(r#"{"sub":"u","exp":1700000000}"#),
            refresh_token: "r".into(),
            expires_at: None,
            expires_in: Some(3600),
            user: AuthUser {
                id: "u".into(),
                email: None,
            },
        };
        assert_eq!(session.expiry().map(|d| d.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn sign_up_outcome_with_session() {
        let outcome: SignUpOutcome = serde_json::from_str(SESSION_FIXTURE).expect("parse");
        assert!(matches!(outcome, SignUpOutcome::SessionIssued(_)));
        assert_eq!(outcome.user().id, "5f1c-user");
    }

    #[test]
    fn sign_up_outcome_pending_confirmation() {
        let body = r#"{"id":"9a0b-user","email":"bruno@example.edu","confirmation_sent_at":"2024-03-01T12:00:00Z"}"#;
        let outcome: SignUpOutcome = serde_json::from_str(body).expect("parse");
        assert!(matches!(outcome, SignUpOutcome::ConfirmationRequired(_)));
        assert_eq!(outcome.user().email.as_deref(), Some("bruno@example.edu"));
    }

    #[test]
    fn credentials_parse_json_and_bare_token() {
        let json = Credentials::parse(r#"{"access_token":"a.b.c","refresh_token":"r"}"#)
            .expect("json credentials");
        assert_eq!(json.refresh_token.as_deref(), Some("r"));

        let bare = Credentials::parse("  a.b.c\n").expect("bare token");
        assert_eq!(bare.access_token, "a.b.c");
        assert!(bare.refresh_token.is_none());

        assert!(Credentials::parse("   \n ").is_none());
    }
}
