mod list;

use cohort_config::CohortConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GroupsCommands;

/// Handle `cohort groups <subcommand>`.
pub async fn handle(
    action: &GroupsCommands,
    flags: &GlobalFlags,
    config: &CohortConfig,
) -> anyhow::Result<()> {
    match action {
        GroupsCommands::List(args) => list::handle(args, flags, config).await,
    }
}
