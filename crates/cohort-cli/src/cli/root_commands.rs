use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, GroupsCommands};

/// Root command set for the `cohort` CLI.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, register, and manage the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse project groups.
    Groups {
        #[command(subcommand)]
        action: GroupsCommands,
    },
    /// Check that the backend is reachable.
    Ping,
}
