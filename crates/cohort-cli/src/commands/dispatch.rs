use cohort_config::CohortConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    flags: &GlobalFlags,
    config: &CohortConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, flags, config).await,
        Commands::Groups { action } => commands::groups::handle(&action, flags, config).await,
        Commands::Ping => commands::ping::handle(flags, config).await,
    }
}
