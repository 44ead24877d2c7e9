//! HTTP client for the hosted auth API (`{backend.url}/auth/v1`).

use std::time::Duration;

use cohort_config::BackendConfig;
use serde_json::json;

use crate::error::AuthError;
use crate::http::check_response;
use crate::session::{Session, SignUpOutcome};

/// Email + password authentication against the hosted service.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Http` if the underlying `reqwest::Client` fails to build.
    pub fn new(backend: &BackendConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cohort/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(backend.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: backend.auth_url(),
            anon_key: backend.anon_key.clone(),
        })
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` with the service's message (e.g. invalid
    /// credentials), or a transport/parse error.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let url = self.endpoint("token?grant_type=password");
        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let session = check_response(resp).await?.json::<Session>().await?;
        tracing::debug!(user_id = %session.user.id, "signed in");
        Ok(session)
    }

    /// Create an account with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` if the service refuses the sign-up (e.g.
    /// weak password, already registered), or a transport/parse error.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let url = self.endpoint("signup");
        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let outcome = check_response(resp).await?.json::<SignUpOutcome>().await?;
        tracing::debug!(user_id = %outcome.user().id, "signed up");
        Ok(outcome)
    }

    /// Ask the service to email password-reset instructions.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` if the service refuses the request.
    pub async fn recover_password(&self, email: &str) -> Result<(), AuthError> {
        let url = self.endpoint("recover");
        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email }))
            .send()
            .await?;
        check_response(resp).await?;
        tracing::debug!("password recovery requested");
        Ok(())
    }

    /// Exchange a refresh token for a new session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` if the refresh token is no longer valid.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let url = self.endpoint("token?grant_type=refresh_token");
        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await?;
        Ok(check_response(resp).await?.json::<Session>().await?)
    }

    /// Revoke the session server-side.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` if the service refuses the request.
    pub async fn logout(&self, access_token: &str) -> Result<(), AuthError> {
        let url = self.endpoint("logout");
        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}
