use cohort_config::CohortConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

/// Revoke the session when a backend is configured; always clear local credentials.
pub async fn handle(flags: &GlobalFlags, config: &CohortConfig) -> anyhow::Result<()> {
    let client = bootstrap::auth_client(config).ok();
    cohort_auth::logout(client.as_ref()).await?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
