use cohort_config::CohortConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    expires_at: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &CohortConfig,
) -> anyhow::Result<()> {
    let client = bootstrap::auth_client(config)?;

    let progress = Progress::spinner("Signing in...");
    let session = match cohort_auth::login(&client, args.email.trim(), &args.password).await {
        Ok(session) => {
            progress.finish_clear();
            session
        }
        Err(error) => {
            progress.finish_err("sign-in failed");
            return Err(anyhow::Error::new(error).context("auth login"));
        }
    };

    output(
        &AuthLoginResponse {
            authenticated: true,
            expires_at: session.expiry().map(|at| at.to_rfc3339()),
            user_id: session.user.id,
            email: session.user.email,
        },
        flags.format,
    )
}
