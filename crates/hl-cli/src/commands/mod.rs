pub mod admin;
pub mod auth;
pub mod community;
pub mod shared;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(&action, ctx, flags).await,
        Commands::Community { action } => community::handle(&action, ctx, flags).await,
        Commands::Admin { action } => admin::handle(&action, ctx, flags).await,
    }
}
