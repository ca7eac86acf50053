mod create;
mod list;
mod manage;
mod members;
mod membership;
mod show;
mod watch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommunityCommands;
use crate::context::AppContext;

pub(crate) use members::page_request;

/// Handle `hl community <subcommand>`.
pub async fn handle(
    action: &CommunityCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommunityCommands::List { pending } => list::run(*pending, ctx, flags).await,
        CommunityCommands::Join { code } => membership::join(code, ctx, flags).await,
        CommunityCommands::Create(args) => create::run(args, ctx, flags).await,
        CommunityCommands::Show { id } => show::run(id, ctx, flags).await,
        CommunityCommands::Leave { id } => membership::leave(id, ctx, flags).await,
        CommunityCommands::Members { id, page } => members::list(id, page, ctx, flags).await,
        CommunityCommands::Requests { id } => members::requests(id, ctx, flags).await,
        CommunityCommands::Approve { id, membership_id } => {
            members::approve(id, *membership_id, ctx, flags).await
        }
        CommunityCommands::Reject { id, membership_id } => {
            members::reject(id, *membership_id, ctx, flags).await
        }
        CommunityCommands::Remove { id, membership_id } => {
            members::remove(id, *membership_id, ctx, flags).await
        }
        CommunityCommands::Update(args) => manage::details(args, ctx, flags).await,
        CommunityCommands::Policy { id, policy } => manage::policy(id, policy, ctx, flags).await,
        CommunityCommands::Status { id, status } => manage::status(id, status, ctx, flags).await,
        CommunityCommands::Watch { interval } => watch::run(*interval, ctx, flags).await,
    }
}
