use clap::Subcommand;

use crate::cli::subcommands::{AdminCommands, AuthCommands, CommunityCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Account, profile and identity verification.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Communities you belong to or manage.
    Community {
        #[command(subcommand)]
        action: CommunityCommands,
    },
    /// Super-admin console.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
