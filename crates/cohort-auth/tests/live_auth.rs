//! # Live tests for cohort-auth
//!
//! These tests talk to a real hosted backend. They are ignored by default and
//! skip (not fail) when credentials are missing.
//!
//! ## Required environment variables
//!
//! ```bash
//! COHORT_BACKEND__URL=https://<project>.supabase.co
//! COHORT_BACKEND__ANON_KEY=...
//! COHORT_TEST_EMAIL=...
//! COHORT_TEST_PASSWORD=...
//! ```
//!
//! ## Run
//!
//! ```bash
//! cargo test -p cohort-auth --test live_auth -- --ignored --nocapture
//! ```

use cohort_auth::{AuthClient, AuthError, SessionClaims};
use cohort_config::BackendConfig;

fn load_env() {
    let workspace_env = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.join(".env"));

    if let Some(env_path) = workspace_env {
        let _ = dotenvy::from_path(&env_path);
    }
}

fn live_backend() -> Option<BackendConfig> {
    load_env();
    let url = std::env::var("COHORT_BACKEND__URL").ok()?;
    let anon_key = std::env::var("COHORT_BACKEND__ANON_KEY").ok()?;
    if url.is_empty() || anon_key.is_empty() {
        return None;
    }
    Some(BackendConfig {
        url,
        anon_key,
        ..Default::default()
    })
}

fn test_account() -> Option<(String, String)> {
    let email = std::env::var("COHORT_TEST_EMAIL").ok()?;
    let password = std::env::var("COHORT_TEST_PASSWORD").ok()?;
    Some((email, password))
}

#[tokio::test]
#[ignore] // requires network
async fn live_sign_in_returns_decodable_session() {
    let (Some(backend), Some((email, password))) = (live_backend(), test_account()) else {
        eprintln!("SKIP: live backend credentials not configured");
        return;
    };

    let client = AuthClient::new(&backend).expect("client");
    let session = client
        .sign_in_with_password(&email, &password)
        .await
        .expect("sign in");

    let claims = SessionClaims::decode(&session.access_token).expect("claims");
    assert_eq!(claims.user_id, session.user.id);
    assert!(!claims.is_near_expiry(60));

    let refreshed = client.refresh(&session.refresh_token).await.expect("refresh");
    assert_eq!(refreshed.user.id, session.user.id);
}

#[tokio::test]
#[ignore] // requires network
async fn live_wrong_password_is_rejected_with_message() {
    let (Some(backend), Some((email, _))) = (live_backend(), test_account()) else {
        eprintln!("SKIP: live backend credentials not configured");
        return;
    };

    let client = AuthClient::new(&backend).expect("client");
    let err = client
        .sign_in_with_password(&email, "definitely-not-the-password")
        .await
        .unwrap_err();

    match err {
        AuthError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert!(!message.is_empty());
        }
        other => panic!("expected rejection, got {other}"),
    }
}
