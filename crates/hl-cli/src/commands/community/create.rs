use hl_client::NewCommunity;

use super::list::CommunityRow;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommunityCreateArgs;
use crate::commands::shared::notices::Notices;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &CommunityCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let community = NewCommunity {
        name: args.name.clone(),
        description: args.description.clone(),
        category: parse_enum(&args.category, "category")?,
        join_policy: parse_enum(&args.join_policy, "join policy")?,
    };

    let notices = Notices::subscribe(&ctx.sync, flags);
    let result = ctx.sync.create(&community).await;
    notices.flush();

    output(&CommunityRow::new(&result?, "admin"), flags.format)
}
