use anyhow::Context;
use cohort_config::CohortConfig;

/// Load `.env`, then the layered config.
pub fn load_config() -> anyhow::Result<CohortConfig> {
    let config = CohortConfig::load_with_dotenv().context("failed to load cohort configuration")?;
    warn_unconfigured(&config);
    Ok(config)
}

/// Auth client for the configured backend.
pub fn auth_client(config: &CohortConfig) -> anyhow::Result<cohort_auth::AuthClient> {
    let backend = config
        .require_backend()
        .context("set COHORT_BACKEND__URL and COHORT_BACKEND__ANON_KEY")?;
    Ok(cohort_auth::AuthClient::new(backend)?)
}

/// Data client carrying the caller's session token, when one is stored.
///
/// A stored token that expired and cannot be refreshed is dropped with a
/// warning; reads then go out with the anonymous key.
pub async fn data_client(config: &CohortConfig) -> anyhow::Result<cohort_data::DataClient> {
    let auth = auth_client(config)?;
    let token = match cohort_auth::refresh::resolve_access_token(&auth).await {
        Ok(token) => token,
        Err(error) => {
            tracing::warn!(%error, "stored session unusable; continuing anonymously");
            None
        }
    };

    let backend = config.require_backend()?;
    Ok(cohort_data::DataClient::new(backend, config.tables.clone())?.with_access_token(token))
}

fn warn_unconfigured(config: &CohortConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CohortConfig, env_keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut warnings = Vec::new();
    let keys = env_keys.into_iter().collect::<Vec<_>>();

    let single_underscore = keys
        .iter()
        .any(|key| key.starts_with("COHORT_BACKEND_") && !key.starts_with("COHORT_BACKEND__"));
    if !config.backend.is_configured() && single_underscore {
        warnings.push(
            "backend config appears default while COHORT_BACKEND* env vars exist. Use double underscores (example: COHORT_BACKEND__URL)."
                .to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use cohort_config::{BackendConfig, CohortConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_backend_keys() {
        let warnings = collect_unconfigured_warnings(
            &CohortConfig::default(),
            vec!["COHORT_BACKEND_URL".to_string(), "HOME".to_string()],
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("COHORT_BACKEND__URL"));
    }

    #[test]
    fn silent_when_backend_is_configured() {
        let config = CohortConfig {
            backend: BackendConfig {
                url: "https://demo.example.co".to_string(),
                anon_key: "anon".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings =
            collect_unconfigured_warnings(&config, vec!["COHORT_BACKEND_URL".to_string()]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn silent_without_backend_env_keys() {
        let warnings = collect_unconfigured_warnings(&CohortConfig::default(), Vec::new());
        assert!(warnings.is_empty());
    }
}
