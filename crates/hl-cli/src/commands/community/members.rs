use hl_core::pagination::PageRequest;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PageArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::notices::Notices;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModerationOutput {
    community_id: String,
    membership_id: i64,
    action: &'static str,
}

#[derive(Clone, Copy)]
enum Moderation {
    Approve,
    Reject,
    Remove,
}

impl Moderation {
    const fn past_tense(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
            Self::Remove => "removed",
        }
    }
}

/// Page size precedence: `--size`, then `--limit`, then 20.
pub(crate) fn page_request(page: &PageArgs, flags: &GlobalFlags) -> PageRequest {
    PageRequest::new(page.page, effective_limit(page.size, flags.limit, 20))
}

pub async fn list(
    id: &str,
    page: &PageArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let members = ctx.sync.members(id, page_request(page, flags)).await?;
    output(&members, flags.format)
}

pub async fn requests(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let requests = ctx.sync.join_requests(id).await?;
    output(&requests, flags.format)
}

pub async fn approve(
    id: &str,
    membership_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    moderate(Moderation::Approve, id, membership_id, ctx, flags).await
}

pub async fn reject(
    id: &str,
    membership_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    moderate(Moderation::Reject, id, membership_id, ctx, flags).await
}

pub async fn remove(
    id: &str,
    membership_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    moderate(Moderation::Remove, id, membership_id, ctx, flags).await
}

async fn moderate(
    action: Moderation,
    id: &str,
    membership_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let notices = Notices::subscribe(&ctx.sync, flags);
    let result = match action {
        Moderation::Approve => ctx.sync.approve(id, membership_id).await,
        Moderation::Reject => ctx.sync.reject(id, membership_id).await,
        Moderation::Remove => ctx.sync.remove_member(id, membership_id).await,
    };
    notices.flush();

    result?;
    output(
        &ModerationOutput {
            community_id: id.to_string(),
            membership_id,
            action: action.past_tense(),
        },
        flags.format,
    )
}
