mod communities;
mod login;
mod users;
mod verify;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

/// Handle `hl admin <subcommand>`.
pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminCommands::Login(args) => login::run(args, ctx, flags).await,
        AdminCommands::Logout => login::logout(ctx, flags),
        AdminCommands::Users {
            page,
            sort_by,
            sort_dir,
            email,
            name,
            role,
            status,
            step,
        } => {
            let filter = users::UserFilterArgs {
                page,
                sort_by,
                sort_dir,
                email: email.as_deref(),
                name: name.as_deref(),
                role: role.as_deref(),
                status: status.as_deref(),
                step: step.as_deref(),
            };
            users::list(&filter, ctx, flags).await
        }
        AdminCommands::User { user_id } => users::show(*user_id, ctx, flags).await,
        AdminCommands::Verify(args) => verify::run(args, ctx, flags).await,
        AdminCommands::Communities {
            page,
            status,
            search,
        } => communities::list(page, status.as_deref(), search.as_deref(), ctx, flags).await,
        AdminCommands::Community { id } => communities::show(*id, ctx, flags).await,
        AdminCommands::CommunityStatus { id, status } => {
            communities::set_status(*id, status, ctx, flags).await
        }
        AdminCommands::DeleteCommunity { id, yes } => {
            communities::delete(*id, *yes, ctx, flags).await
        }
        AdminCommands::CommunityMembers { id, page } => {
            communities::members(*id, page, ctx, flags).await
        }
    }
}
