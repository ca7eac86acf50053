mod documents;
mod login;
mod logout;
mod next_step;
mod profile;
mod register;
mod status;
mod verification;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `hl auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Register(args) => register::run(args, ctx, flags).await,
        AuthCommands::Login(args) => login::run(args, ctx, flags).await,
        AuthCommands::Logout => logout::run(ctx, flags),
        AuthCommands::Status => status::run(ctx, flags),
        AuthCommands::Profile(args) => profile::run(args, ctx, flags).await,
        AuthCommands::Documents(args) => documents::run(args, ctx, flags).await,
        AuthCommands::Verification => verification::run(ctx, flags).await,
        AuthCommands::NextStep => next_step::run(ctx, flags).await,
    }
}
