//! Data API error types.

use thiserror::Error;

/// Errors from the hosted data API.
#[derive(Debug, Error)]
pub enum DataError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The data API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the API, or the response body.
        message: String,
    },

    /// One of the group-list reads failed; the whole load is abandoned.
    #[error("failed to fetch {table}: {source}")]
    Fetch {
        table: String,
        #[source]
        source: Box<DataError>,
    },

    /// Failed to parse a data API response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl DataError {
    pub fn fetch(table: impl Into<String>, source: Self) -> Self {
        Self::Fetch {
            table: table.into(),
            source: Box::new(source),
        }
    }

    /// Whether repeating the request could succeed.
    ///
    /// Client errors other than timeouts and rate limiting are permanent.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status >= 500 || matches!(*status, 408 | 429),
            Self::Fetch { source, .. } => source.is_transient(),
            Self::Parse(_) => false,
        }
    }
}
