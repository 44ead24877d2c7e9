use cohort_config::CohortConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRecoverArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthRecoverResponse {
    email: String,
    sent: bool,
}

pub async fn handle(
    args: &AuthRecoverArgs,
    flags: &GlobalFlags,
    config: &CohortConfig,
) -> anyhow::Result<()> {
    let email = args.email.trim();
    if email.is_empty() {
        anyhow::bail!("auth recover: --email must not be empty");
    }

    let client = bootstrap::auth_client(config)?;
    client.recover_password(email).await?;
    tracing::info!(email, "password recovery requested");

    output(
        &AuthRecoverResponse {
            email: email.to_string(),
            sent: true,
        },
        flags.format,
    )
}
