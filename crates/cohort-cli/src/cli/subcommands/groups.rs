use clap::{Args, Subcommand};

/// Group commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GroupsCommands {
    /// List every group with its members and evaluation.
    List(GroupsListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GroupsListArgs {
    /// Show members and evaluation on every card.
    #[arg(long)]
    pub expand: bool,
    /// Extra attempts if loading fails (overrides `general.retries`).
    #[arg(long)]
    pub retries: Option<u32>,
}
