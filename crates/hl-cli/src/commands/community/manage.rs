use hl_client::CommunityUpdate;
use hl_core::entities::Community;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommunityUpdateArgs;
use crate::commands::shared::notices::Notices;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn details(
    args: &CommunityUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = CommunityUpdate {
        name: args.name.clone(),
        description: args.description.clone(),
        category: parse_enum(&args.category, "category")?,
    };
    let notices = Notices::subscribe(&ctx.sync, flags);
    let result = ctx.sync.update_details(&args.id, &update).await;
    finish(notices, result, flags)
}

pub async fn policy(
    id: &str,
    policy: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let policy = parse_enum(policy, "join policy")?;
    let notices = Notices::subscribe(&ctx.sync, flags);
    let result = ctx.sync.update_join_policy(id, policy).await;
    finish(notices, result, flags)
}

pub async fn status(
    id: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum(status, "status")?;
    let notices = Notices::subscribe(&ctx.sync, flags);
    let result = ctx.sync.update_status(id, status).await;
    finish(notices, result, flags)
}

fn finish(
    notices: Notices,
    result: Result<Community, hl_sync::SyncError>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    notices.flush();
    output(&result?, flags.format)
}
