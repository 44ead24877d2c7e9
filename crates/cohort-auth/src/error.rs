use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `cohort auth login`")]
    NotAuthenticated,

    #[error("session expired — run `cohort auth login` to sign in again")]
    TokenExpired,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The auth service refused the request; `message` is its own description.
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    #[error("unexpected auth response: {0}")]
    Parse(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
