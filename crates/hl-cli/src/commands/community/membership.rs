use serde::Serialize;

use super::list::CommunityRow;
use crate::cli::GlobalFlags;
use crate::commands::shared::notices::Notices;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LeaveOutput {
    id: String,
    left: bool,
}

pub async fn join(code: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let notices = Notices::subscribe(&ctx.sync, flags);
    let result = ctx.sync.join(code).await;
    notices.flush();

    let community = result?;
    let relation = if community.is_pending() {
        "pending"
    } else if community.is_admin {
        "admin"
    } else {
        "member"
    };
    output(&CommunityRow::new(&community, relation), flags.format)
}

pub async fn leave(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let notices = Notices::subscribe(&ctx.sync, flags);
    let result = ctx.sync.leave(id).await;
    notices.flush();

    result?;
    output(
        &LeaveOutput {
            id: id.to_string(),
            left: true,
        },
        flags.format,
    )
}
