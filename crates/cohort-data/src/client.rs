//! HTTP client for the hosted data API (`{backend.url}/rest/v1`).

use std::time::Duration;

use cohort_config::{BackendConfig, TablesConfig};
use cohort_core::NewStudent;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DataError;
use crate::http::check_response;
use crate::rows::StudentInsert;

/// Reads and writes rows through the data API.
///
/// Requests carry the anonymous key as `apikey`, and the signed-in user's access
/// token (or the anonymous key when signed out) as the bearer token.
#[derive(Debug, Clone)]
pub struct DataClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
    pub(crate) tables: TablesConfig,
}

impl DataClient {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Http` if the underlying `reqwest::Client` fails to build.
    pub fn new(backend: &BackendConfig, tables: TablesConfig) -> Result<Self, DataError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cohort/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(backend.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: backend.rest_url(),
            anon_key: backend.anon_key.clone(),
            access_token: None,
            tables,
        })
    }

    /// Act on behalf of a signed-in user.
    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token.filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub const fn tables(&self) -> &TablesConfig {
        &self.tables
    }

    /// Fetch every row of `table`, selecting `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the request fails, the API returns a non-success
    /// status, or the rows cannot be decoded as `T`.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
    ) -> Result<Vec<T>, DataError> {
        let url = self.select_url(table, columns, None);
        tracing::debug!(%table, %columns, "fetching rows");
        let resp = check_response(self.authorized(self.http.get(&url)).send().await?).await?;
        resp.json::<Vec<T>>()
            .await
            .map_err(|e| DataError::Parse(format!("{table}: {e}")))
    }

    /// Insert `rows` into `table` without reading them back.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the request fails or the API rejects the rows.
    pub async fn insert<T: Serialize + Sync>(&self, table: &str, rows: &[T]) -> Result<(), DataError> {
        let url = format!("{}/{}", self.base_url, urlencoding::encode(table));
        let request = self
            .authorized(self.http.post(&url))
            .header("Prefer", "return=minimal")
            .json(rows);
        check_response(request.send().await?).await?;
        tracing::debug!(%table, rows = rows.len(), "inserted rows");
        Ok(())
    }

    /// Write the student row that accompanies a new account.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the insert is rejected.
    pub async fn register_student(&self, student: &NewStudent) -> Result<(), DataError> {
        self.insert(&self.tables.students, &[StudentInsert::from(student)])
            .await
    }

    /// Connection check: read at most one row of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the backend is unreachable or refuses the read.
    pub async fn ping(&self, table: &str) -> Result<usize, DataError> {
        let url = self.select_url(table, "*", Some(1));
        let resp = check_response(self.authorized(self.http.get(&url)).send().await?).await?;
        let rows = resp
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| DataError::Parse(format!("{table}: {e}")))?;
        Ok(rows.len())
    }

    fn select_url(&self, table: &str, columns: &str, limit: Option<u32>) -> String {
        let mut url = format!(
            "{}/{}?select={}",
            self.base_url,
            urlencoding::encode(table),
            urlencoding::encode(columns)
        );
        if let Some(limit) = limit {
            url.push_str(&format!("&limit={limit}"));
        }
        url
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        request.header("apikey", &self.anon_key).bearer_auth(bearer)
    }
}
